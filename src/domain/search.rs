use super::Contacts;

/// Lazy walk over the contacts matching a search term.
///
/// Matching happens as the iterator advances, so a `Search` costs nothing
/// until it is consumed. It can be cloned or rewound with [`Search::restart`]
/// to walk the same matches again.
#[derive(Debug, Clone)]
pub struct Search<'a> {
    contacts: &'a Contacts,
    term: String,
    position: usize,
}

impl<'a> Search<'a> {
    pub fn new(contacts: &'a Contacts, term: &str) -> Self {
        Self {
            contacts,
            term: term.trim().to_lowercase(),
            position: 0,
        }
    }

    /// The normalized term used for matching.
    pub fn term(&self) -> &str {
        &self.term
    }

    pub fn restart(&mut self) {
        self.position = 0;
    }
}

impl<'a> Iterator for Search<'a> {
    type Item = (&'a str, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        let contacts = self.contacts;

        while let Some((name, contact)) = contacts.get_index(self.position) {
            self.position += 1;

            if contact.matches(&self.term) {
                return Some((name.as_str(), contact.phone.as_str()));
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.contacts.len().saturating_sub(self.position)))
    }
}
