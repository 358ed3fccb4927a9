//! Author entity, the owner of quotes.

/// A quote author.
///
/// `(name, surname)` is unique across all authors, deleted or not.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Author {
    pub id: i64,
    pub name: String,
    pub surname: String,
    pub deleted: bool,
}

impl Author {
    /// Creates a new Author instance.
    pub fn new(id: i64, name: String, surname: String, deleted: bool) -> Self {
        Self {
            id,
            name,
            surname,
            deleted,
        }
    }

    /// Returns true if the author has been soft-deleted.
    pub fn is_deleted(&self) -> bool {
        self.deleted
    }
}

/// Input data for creating a new author.
///
/// New authors are never deleted.
#[derive(Debug, Clone)]
pub struct NewAuthor {
    pub name: String,
    pub surname: String,
}

impl NewAuthor {
    /// Builds a new author, defaulting a missing surname to the empty string.
    pub fn new(name: String, surname: Option<String>) -> Self {
        Self {
            name,
            surname: surname.unwrap_or_default(),
        }
    }
}

/// Partial update for an existing author.
///
/// `None` fields are left unchanged.
#[derive(Debug, Clone, Default)]
pub struct AuthorPatch {
    pub name: Option<String>,
    pub surname: Option<String>,
}

impl AuthorPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.surname.is_none()
    }
}

/// Ordering applied when listing authors.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AuthorOrder {
    #[default]
    Id,
    Name,
    Surname,
}
