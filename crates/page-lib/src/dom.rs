// ============================
// crates/page-lib/src/dom.rs
// ============================
//! Document port and an in-memory document.
//!
//! The page components never touch a rendering engine directly. They go
//! through [`Document`], which a browser binding or [`MemoryDocument`]
//! implements.
use std::sync::atomic::{AtomicU64, Ordering};

use ecotrack_common::{Display, ElementSpec, FlashMessage, PageSnapshot};
use parking_lot::RwLock;

use crate::error::PageError;

static NEXT_DOCUMENT_ID: AtomicU64 = AtomicU64::new(1);

/// Reference to an element inside one particular document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ElementHandle {
    document: u64,
    index: usize,
}

impl ElementHandle {
    /// Position of the element in document order
    pub fn index(&self) -> usize {
        self.index
    }
}

/// Operations the page scripts need from a live document
pub trait Document: Send + Sync {
    /// All elements whose class list contains `class`, in document order.
    /// Every call queries the document afresh.
    fn elements_by_class(&self, class: &str) -> Vec<ElementHandle>;

    /// Set the inline display style of an element
    fn set_display(&self, element: ElementHandle, display: Display) -> Result<(), PageError>;

    /// Current inline display style of an element
    fn display(&self, element: ElementHandle) -> Result<Display, PageError>;

    /// Current value of the form field with the given id
    fn field_value(&self, id: &str) -> Result<String, PageError>;
}

/// Thread-safe document held entirely in memory
#[derive(Debug)]
pub struct MemoryDocument {
    id: u64,
    title: String,
    elements: RwLock<Vec<ElementSpec>>,
}

impl Default for MemoryDocument {
    fn default() -> Self {
        Self::from_snapshot(PageSnapshot::default())
    }
}

impl MemoryDocument {
    /// Create a document holding the snapshot's elements
    pub fn from_snapshot(snapshot: PageSnapshot) -> Self {
        Self {
            id: NEXT_DOCUMENT_ID.fetch_add(1, Ordering::Relaxed),
            title: snapshot.title,
            elements: RwLock::new(snapshot.elements),
        }
    }

    /// Export the current state of the document
    pub fn snapshot(&self) -> PageSnapshot {
        PageSnapshot {
            title: self.title.clone(),
            elements: self.elements.read().clone(),
        }
    }

    /// Append an element and return its handle
    pub fn append(&self, element: ElementSpec) -> ElementHandle {
        let mut elements = self.elements.write();
        elements.push(element);
        ElementHandle {
            document: self.id,
            index: elements.len() - 1,
        }
    }

    /// Render a flashed message as an alert banner
    pub fn push_flash(&self, flash: &FlashMessage) -> ElementHandle {
        self.append(ElementSpec::flash(flash))
    }

    /// Replace the value of a form field, as if the user typed it
    pub fn set_field_value(&self, id: &str, value: impl Into<String>) -> Result<(), PageError> {
        let mut elements = self.elements.write();
        let element = elements
            .iter_mut()
            .find(|e| e.id.as_deref() == Some(id))
            .ok_or_else(|| PageError::MissingElement { id: id.to_string() })?;

        match element.value.as_mut() {
            Some(current) => {
                *current = value.into();
                Ok(())
            },
            None => Err(PageError::NotAField { id: id.to_string() }),
        }
    }

    fn check(&self, element: ElementHandle, len: usize) -> Result<usize, PageError> {
        if element.document != self.id || element.index >= len {
            return Err(PageError::StaleHandle(element.index));
        }
        Ok(element.index)
    }
}

impl Document for MemoryDocument {
    fn elements_by_class(&self, class: &str) -> Vec<ElementHandle> {
        self.elements
            .read()
            .iter()
            .enumerate()
            .filter(|(_, e)| e.has_class(class))
            .map(|(index, _)| ElementHandle {
                document: self.id,
                index,
            })
            .collect()
    }

    fn set_display(&self, element: ElementHandle, display: Display) -> Result<(), PageError> {
        let mut elements = self.elements.write();
        let index = self.check(element, elements.len())?;
        elements[index].display = display;
        Ok(())
    }

    fn display(&self, element: ElementHandle) -> Result<Display, PageError> {
        let elements = self.elements.read();
        let index = self.check(element, elements.len())?;
        Ok(elements[index].display)
    }

    fn field_value(&self, id: &str) -> Result<String, PageError> {
        // getElementById returns the first match
        let elements = self.elements.read();
        let element = elements
            .iter()
            .find(|e| e.id.as_deref() == Some(id))
            .ok_or_else(|| PageError::MissingElement { id: id.to_string() })?;

        element
            .value
            .clone()
            .ok_or_else(|| PageError::NotAField { id: id.to_string() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ecotrack_common::{FlashCategory, ALERT_CLASS, PASSWORD_FIELD_ID};

    fn register_page() -> MemoryDocument {
        let doc = MemoryDocument::default();
        doc.push_flash(&FlashMessage::new(FlashCategory::Danger, "Email already registered"));
        doc.append(ElementSpec {
            tag: "h1".to_string(),
            text: "Register".to_string(),
            ..ElementSpec::default()
        });
        doc.push_flash(&FlashMessage::new(FlashCategory::Info, "Logged out successfully!"));
        doc.append(ElementSpec::input(PASSWORD_FIELD_ID, "abc"));
        doc
    }

    #[test]
    fn test_elements_by_class_in_document_order() {
        let doc = register_page();
        let alerts = doc.elements_by_class(ALERT_CLASS);
        let indices: Vec<usize> = alerts.iter().map(ElementHandle::index).collect();
        assert_eq!(indices, vec![0, 2]);

        assert!(doc.elements_by_class("alert-danger").len() == 1);
        assert!(doc.elements_by_class("missing").is_empty());
    }

    #[test]
    fn test_query_sees_later_mutations() {
        let doc = register_page();
        assert_eq!(doc.elements_by_class(ALERT_CLASS).len(), 2);

        doc.push_flash(&FlashMessage::new(FlashCategory::Warning, "Associated waste collection not found."));
        assert_eq!(doc.elements_by_class(ALERT_CLASS).len(), 3);
    }

    #[test]
    fn test_set_display() {
        let doc = register_page();
        let first = doc.elements_by_class(ALERT_CLASS)[0];

        assert_eq!(doc.display(first).unwrap(), Display::Default);
        doc.set_display(first, Display::None).unwrap();
        assert_eq!(doc.display(first).unwrap(), Display::None);
        assert_eq!(doc.snapshot().elements[0].display, Display::None);
    }

    #[test]
    fn test_foreign_handle_is_rejected() {
        let doc = register_page();
        let other = register_page();
        let foreign = other.elements_by_class(ALERT_CLASS)[0];

        assert!(matches!(
            doc.set_display(foreign, Display::None),
            Err(PageError::StaleHandle(0))
        ));
    }

    #[test]
    fn test_field_value() {
        let doc = register_page();
        assert_eq!(doc.field_value(PASSWORD_FIELD_ID).unwrap(), "abc");

        doc.set_field_value(PASSWORD_FIELD_ID, "abcdefgh").unwrap();
        assert_eq!(doc.field_value(PASSWORD_FIELD_ID).unwrap(), "abcdefgh");

        assert!(matches!(
            doc.field_value("email"),
            Err(PageError::MissingElement { .. })
        ));
    }

    #[test]
    fn test_non_field_has_no_value() {
        let doc = MemoryDocument::default();
        doc.append(ElementSpec {
            tag: "div".to_string(),
            id: Some(PASSWORD_FIELD_ID.to_string()),
            ..ElementSpec::default()
        });

        assert!(matches!(
            doc.field_value(PASSWORD_FIELD_ID),
            Err(PageError::NotAField { .. })
        ));
        assert!(matches!(
            doc.set_field_value(PASSWORD_FIELD_ID, "x"),
            Err(PageError::NotAField { .. })
        ));
    }
}
