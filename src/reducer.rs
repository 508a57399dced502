//! List State Reducer
//!
//! Pure operations over the grocery collection plus `ListState`, which pairs
//! the collection with the edit cursor and keeps the cursor valid.
//! Nothing here touches Leptos or the browser.

use thiserror::Error;
use uuid::Uuid;

use crate::models::Item;

/// Ordered grocery items, insertion order
pub type Collection = Vec<Item>;

/// Input rejected by a reducer operation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("title is empty")]
    Empty,
    #[error("no item with id {0}")]
    NotFound(String),
}

pub type ReduceResult<T> = Result<T, ValidationError>;

fn validate_title(title: &str) -> ReduceResult<()> {
    if title.trim().is_empty() {
        return Err(ValidationError::Empty);
    }
    Ok(())
}

/// Fresh id not present in `collection`
pub fn new_item_id(collection: &[Item]) -> String {
    loop {
        let id = Uuid::new_v4().to_string();
        if !collection.iter().any(|item| item.id == id) {
            return id;
        }
    }
}

/// Append a new item with a generated id
pub fn add(collection: &[Item], title: &str) -> ReduceResult<Collection> {
    validate_title(title)?;
    let mut next = collection.to_vec();
    next.push(Item::new(new_item_id(collection), title));
    Ok(next)
}

/// Replace the title of `cursor_id` in place
pub fn update(collection: &[Item], cursor_id: &str, new_title: &str) -> ReduceResult<Collection> {
    validate_title(new_title)?;
    if !collection.iter().any(|item| item.id == cursor_id) {
        return Err(ValidationError::NotFound(cursor_id.to_string()));
    }
    Ok(collection
        .iter()
        .map(|item| {
            if item.id == cursor_id {
                Item::new(item.id.clone(), new_title)
            } else {
                item.clone()
            }
        })
        .collect())
}

/// Drop the item with `id`; unknown ids leave the collection as is
pub fn remove(collection: &[Item], id: &str) -> Collection {
    collection.iter().filter(|item| item.id != id).cloned().collect()
}

pub fn clear(_collection: &[Item]) -> Collection {
    Collection::new()
}

/// Returns `(cursor, title)` used to seed the input buffer
pub fn begin_edit(collection: &[Item], id: &str) -> ReduceResult<(String, String)> {
    collection
        .iter()
        .find(|item| item.id == id)
        .map(|item| (item.id.clone(), item.title.clone()))
        .ok_or_else(|| ValidationError::NotFound(id.to_string()))
}

/// Which path a submit took
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Submitted {
    Added,
    Updated,
}

/// Collection plus edit cursor
///
/// The cursor is either `None` or the id of an item in `items`; every
/// method below keeps it that way.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListState {
    pub items: Collection,
    pub editing: Option<String>,
}

impl ListState {
    pub fn new(items: Collection) -> Self {
        Self { items, editing: None }
    }

    pub fn is_editing(&self) -> bool {
        self.editing.is_some()
    }

    pub fn is_editing_item(&self, id: &str) -> bool {
        self.editing.as_deref() == Some(id)
    }

    /// Add or update depending on the cursor
    ///
    /// A cursor whose target has vanished is dropped along with the error.
    pub fn submit(&mut self, input: &str) -> ReduceResult<Submitted> {
        match self.editing.clone() {
            Some(cursor) => match update(&self.items, &cursor, input) {
                Ok(next) => {
                    self.items = next;
                    self.editing = None;
                    Ok(Submitted::Updated)
                }
                Err(ValidationError::Empty) => Err(ValidationError::Empty),
                Err(err) => {
                    self.editing = None;
                    Err(err)
                }
            },
            None => {
                self.items = add(&self.items, input)?;
                Ok(Submitted::Added)
            }
        }
    }

    /// Set the cursor, returning the title to put in the input buffer
    pub fn begin_edit(&mut self, id: &str) -> ReduceResult<String> {
        let (cursor, title) = begin_edit(&self.items, id)?;
        self.editing = Some(cursor);
        Ok(title)
    }

    pub fn cancel_edit(&mut self) {
        self.editing = None;
    }

    /// Returns whether an item was removed
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.items.len();
        self.items = remove(&self.items, id);
        if self.is_editing_item(id) {
            self.editing = None;
        }
        self.items.len() != before
    }

    pub fn clear(&mut self) {
        self.items = clear(&self.items);
        self.editing = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Collection {
        vec![
            Item::new("a", "eggs"),
            Item::new("b", "milk"),
            Item::new("c", "bread"),
        ]
    }

    #[test]
    fn test_add_appends_with_given_title() {
        for title in ["eggs", "  spaced  ", "x"] {
            let items = sample();
            let next = add(&items, title).unwrap();
            assert_eq!(next.len(), items.len() + 1);
            assert_eq!(next.last().unwrap().title, title);
            assert_eq!(&next[..items.len()], &items[..]);
        }
    }

    #[test]
    fn test_add_rejects_blank() {
        let items = sample();
        assert_eq!(add(&items, ""), Err(ValidationError::Empty));
        assert_eq!(add(&items, "   "), Err(ValidationError::Empty));
        assert_eq!(add(&items, "\t\n"), Err(ValidationError::Empty));
    }

    #[test]
    fn test_add_generates_unique_ids() {
        let mut items = Collection::new();
        for i in 0..200 {
            items = add(&items, &format!("item {}", i)).unwrap();
        }
        let mut ids: Vec<_> = items.iter().map(|i| i.id.clone()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 200);
    }

    #[test]
    fn test_update_in_place() {
        let items = sample();
        let next = update(&items, "b", "oat milk").unwrap();
        assert_eq!(next.len(), 3);
        assert_eq!(next[1], Item::new("b", "oat milk"));
        assert_eq!(next[0], items[0]);
        assert_eq!(next[2], items[2]);
    }

    #[test]
    fn test_update_errors() {
        let items = sample();
        assert_eq!(update(&items, "b", " "), Err(ValidationError::Empty));
        assert_eq!(
            update(&items, "zzz", "tea"),
            Err(ValidationError::NotFound("zzz".to_string()))
        );
    }

    #[test]
    fn test_remove() {
        let items = sample();
        for item in &items {
            let next = remove(&items, &item.id);
            assert_eq!(next.len(), items.len() - 1);
            assert!(next.iter().all(|i| i.id != item.id));
        }
        assert_eq!(remove(&items, "missing"), items);
    }

    #[test]
    fn test_remove_compacts_order() {
        let next = remove(&sample(), "b");
        let ids: Vec<_> = next.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "c"]);
    }

    #[test]
    fn test_clear() {
        assert!(clear(&sample()).is_empty());
        assert!(clear(&[]).is_empty());
    }

    #[test]
    fn test_begin_edit() {
        let items = sample();
        assert_eq!(
            begin_edit(&items, "c"),
            Ok(("c".to_string(), "bread".to_string()))
        );
        assert_eq!(
            begin_edit(&items, "nope"),
            Err(ValidationError::NotFound("nope".to_string()))
        );
    }

    #[test]
    fn test_state_scenario() {
        let mut state = ListState::default();

        assert_eq!(state.submit("eggs"), Ok(Submitted::Added));
        let x = state.items[0].id.clone();
        assert_eq!(state.items, vec![Item::new(x.clone(), "eggs")]);

        assert_eq!(state.submit("milk"), Ok(Submitted::Added));
        let y = state.items[1].id.clone();
        assert_ne!(x, y);

        assert_eq!(state.begin_edit(&x), Ok("eggs".to_string()));
        assert!(state.is_editing_item(&x));

        assert_eq!(state.submit("brown eggs"), Ok(Submitted::Updated));
        assert!(!state.is_editing());
        assert_eq!(
            state.items,
            vec![Item::new(x.clone(), "brown eggs"), Item::new(y.clone(), "milk")]
        );

        assert!(state.remove(&y));
        assert_eq!(state.items, vec![Item::new(x, "brown eggs")]);

        state.clear();
        assert!(state.items.is_empty());
    }

    #[test]
    fn test_blank_submit_keeps_edit_mode() {
        let mut state = ListState::new(sample());
        state.begin_edit("a").unwrap();
        assert_eq!(state.submit("  "), Err(ValidationError::Empty));
        assert!(state.is_editing_item("a"));
        assert_eq!(state.items, sample());
    }

    #[test]
    fn test_remove_edited_item_clears_cursor() {
        let mut state = ListState::new(sample());
        state.begin_edit("b").unwrap();
        assert!(state.remove("b"));
        assert_eq!(state.editing, None);

        // Removing some other item keeps the cursor
        state.begin_edit("a").unwrap();
        assert!(state.remove("c"));
        assert!(state.is_editing_item("a"));
    }

    #[test]
    fn test_submit_with_vanished_cursor() {
        let mut state = ListState::new(sample());
        state.editing = Some("gone".to_string());
        assert_eq!(
            state.submit("tea"),
            Err(ValidationError::NotFound("gone".to_string()))
        );
        assert_eq!(state.editing, None);
        assert_eq!(state.items, sample());
    }

    #[test]
    fn test_clear_leaves_edit_mode() {
        let mut state = ListState::new(sample());
        state.begin_edit("a").unwrap();
        state.clear();
        assert!(state.items.is_empty());
        assert!(!state.is_editing());
    }

    #[test]
    fn test_remove_unknown_is_noop() {
        let mut state = ListState::new(sample());
        assert!(!state.remove("missing"));
        assert_eq!(state.items, sample());
    }
}
