/*
 * Responsibility
 * - posts CRUD over the in-memory store
 * - a post is addressed by its current position; delete shifts every later post down by one
 * - every read-modify-write runs under a single RwLock
 */
use std::sync::Arc;

use tokio::sync::RwLock;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthorRow {
    pub full_name: String,
    pub username: String,
    pub email: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostRow {
    pub title: String,
    pub body: String,
    pub author: AuthorRow,
}

/// Fields to overwrite on a partial update. `None` keeps the stored value.
#[derive(Debug, Default)]
pub struct PostChanges<'a> {
    pub title: Option<&'a str>,
    pub body: Option<&'a str>,
    pub author: AuthorChanges<'a>,
}

#[derive(Debug, Default)]
pub struct AuthorChanges<'a> {
    pub full_name: Option<&'a str>,
    pub username: Option<&'a str>,
    pub email: Option<&'a str>,
}

impl PostChanges<'_> {
    fn apply_to(&self, row: &mut PostRow) {
        overwrite(&mut row.title, self.title);
        overwrite(&mut row.body, self.body);
        overwrite(&mut row.author.full_name, self.author.full_name);
        overwrite(&mut row.author.username, self.author.username);
        overwrite(&mut row.author.email, self.author.email);
    }
}

fn overwrite(field: &mut String, value: Option<&str>) {
    if let Some(v) = value {
        field.clear();
        field.push_str(v);
    }
}

/// Handle to the post store. Cloning shares the same underlying sequence.
#[derive(Debug, Clone, Default)]
pub struct PostStore {
    rows: Arc<RwLock<Vec<PostRow>>>,
}

impl PostStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn list(&self) -> Vec<PostRow> {
        self.rows.read().await.clone()
    }

    /// Appends `row` and returns the whole store as it stands right after the append.
    pub async fn create(&self, row: PostRow) -> Vec<PostRow> {
        let mut rows = self.rows.write().await;
        rows.push(row);
        rows.clone()
    }

    pub async fn get(&self, index: usize) -> Option<PostRow> {
        self.rows.read().await.get(index).cloned()
    }

    /// Cheap bounds check. Writers still re-check under the write lock,
    /// since a delete can land between this call and the write.
    pub async fn contains(&self, index: usize) -> bool {
        index < self.rows.read().await.len()
    }

    pub async fn replace(&self, index: usize, row: PostRow) -> Option<PostRow> {
        let mut rows = self.rows.write().await;
        let slot = rows.get_mut(index)?;
        *slot = row;
        Some(slot.clone())
    }

    pub async fn update(&self, index: usize, changes: &PostChanges<'_>) -> Option<PostRow> {
        let mut rows = self.rows.write().await;
        let slot = rows.get_mut(index)?;
        changes.apply_to(slot);
        Some(slot.clone())
    }

    pub async fn delete(&self, index: usize) -> bool {
        let mut rows = self.rows.write().await;
        if index >= rows.len() {
            return false;
        }
        rows.remove(index);
        true
    }

    #[cfg(test)]
    pub async fn len(&self) -> usize {
        self.rows.read().await.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(title: &str) -> PostRow {
        PostRow {
            title: title.to_string(),
            body: format!("{title} body"),
            author: AuthorRow {
                full_name: "Ada Lovelace".into(),
                username: "ada".into(),
                email: "ada@example.com".into(),
            },
        }
    }

    #[tokio::test]
    async fn create_appends_and_returns_snapshot() {
        let store = PostStore::new();
        let first = store.create(row("a")).await;
        assert_eq!(first.len(), 1);

        let second = store.create(row("b")).await;
        assert_eq!(second, vec![row("a"), row("b")]);
        assert_eq!(store.get(1).await, Some(row("b")));
    }

    #[tokio::test]
    async fn out_of_range_is_none() {
        let store = PostStore::new();
        assert_eq!(store.get(0).await, None);
        assert!(!store.contains(0).await);
        assert_eq!(store.replace(0, row("x")).await, None);
        assert!(store.update(0, &PostChanges::default()).await.is_none());
        assert!(!store.delete(0).await);
        assert_eq!(store.len().await, 0);
    }

    #[tokio::test]
    async fn update_keeps_unspecified_fields() {
        let store = PostStore::new();
        store.create(row("a")).await;

        let changes = PostChanges {
            title: Some("C"),
            author: AuthorChanges {
                email: Some("new@example.com"),
                ..Default::default()
            },
            ..Default::default()
        };
        let updated = store.update(0, &changes).await.unwrap();

        assert_eq!(updated.title, "C");
        assert_eq!(updated.body, "a body");
        assert_eq!(updated.author.full_name, "Ada Lovelace");
        assert_eq!(updated.author.username, "ada");
        assert_eq!(updated.author.email, "new@example.com");
        assert_eq!(store.get(0).await, Some(updated));
    }

    #[tokio::test]
    async fn delete_shifts_later_positions() {
        let store = PostStore::new();
        for t in ["a", "b", "c"] {
            store.create(row(t)).await;
        }

        assert!(store.contains(2).await);
        assert!(store.delete(0).await);
        assert_eq!(store.len().await, 2);
        assert!(!store.contains(2).await);
        assert_eq!(store.get(0).await, Some(row("b")));
        assert_eq!(store.get(1).await, Some(row("c")));
        assert_eq!(store.get(2).await, None);
    }

    #[tokio::test]
    async fn clones_share_state() {
        let store = PostStore::new();
        let handle = store.clone();
        handle.create(row("a")).await;
        assert_eq!(store.list().await, vec![row("a")]);
    }

    #[tokio::test]
    async fn concurrent_creates_are_not_lost() {
        let store = PostStore::new();
        let tasks: Vec<_> = (0..64)
            .map(|i| {
                let store = store.clone();
                tokio::spawn(async move { store.create(row(&i.to_string())).await })
            })
            .collect();
        for task in tasks {
            task.await.unwrap();
        }
        assert_eq!(store.len().await, 64);
    }
}
