//! Mock implementations for all repository traits
//!
//! This module provides in-memory mock implementations that can be used
//! for unit testing without requiring actual database connections.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use manyworker_domain::entities::{Actor, Category, Message, SocialProfile, Task};
use manyworker_domain::repositories::{
    ActorDirectory, CategoryRepository, MessageRepository, SocialProfileRepository, TaskRepository,
};
use manyworker_errors::{MarketplaceError, MarketplaceResult};

/// Mock implementation of ActorDirectory for testing
///
/// Enumeration order is ascending actor id, mirroring the SQL
/// `ORDER BY id` used by the Postgres directory.
#[derive(Debug, Clone, Default)]
pub struct MockActorDirectory {
    actors: Arc<Mutex<BTreeMap<i64, Actor>>>,
}

impl MockActorDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_actors(actors: Vec<Actor>) -> Self {
        let map = actors.into_iter().map(|a| (a.id, a)).collect();
        Self {
            actors: Arc::new(Mutex::new(map)),
        }
    }

    pub fn insert(&self, actor: Actor) {
        self.actors.lock().unwrap().insert(actor.id, actor);
    }

    pub fn count(&self) -> usize {
        self.actors.lock().unwrap().len()
    }
}

#[async_trait]
impl ActorDirectory for MockActorDirectory {
    async fn resolve(&self, id: i64) -> MarketplaceResult<Option<Actor>> {
        Ok(self.actors.lock().unwrap().get(&id).cloned())
    }

    async fn find_all(&self) -> MarketplaceResult<Vec<Actor>> {
        Ok(self.actors.lock().unwrap().values().cloned().collect())
    }
}

/// Mock implementation of TaskRepository for testing
#[derive(Debug, Clone, Default)]
pub struct MockTaskRepository {
    tasks: Arc<Mutex<BTreeMap<String, Task>>>,
}

impl MockTaskRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tasks(tasks: Vec<Task>) -> Self {
        let map = tasks.into_iter().map(|t| (t.id.clone(), t)).collect();
        Self {
            tasks: Arc::new(Mutex::new(map)),
        }
    }

    pub fn count(&self) -> usize {
        self.tasks.lock().unwrap().len()
    }

    pub fn get_all_tasks(&self) -> Vec<Task> {
        self.tasks.lock().unwrap().values().cloned().collect()
    }
}

#[async_trait]
impl TaskRepository for MockTaskRepository {
    async fn create(&self, task: &Task) -> MarketplaceResult<Task> {
        let mut tasks = self.tasks.lock().unwrap();
        tasks.insert(task.id.clone(), task.clone());
        Ok(task.clone())
    }

    async fn find_by_id(&self, id: &str) -> MarketplaceResult<Option<Task>> {
        Ok(self.tasks.lock().unwrap().get(id).cloned())
    }

    async fn find_all(&self) -> MarketplaceResult<Vec<Task>> {
        Ok(self.tasks.lock().unwrap().values().cloned().collect())
    }

    async fn update(&self, task: &Task) -> MarketplaceResult<()> {
        let mut tasks = self.tasks.lock().unwrap();
        if !tasks.contains_key(&task.id) {
            return Err(MarketplaceError::task_not_found(task.id.clone()));
        }
        tasks.insert(task.id.clone(), task.clone());
        Ok(())
    }

    async fn delete(&self, id: &str) -> MarketplaceResult<()> {
        let mut tasks = self.tasks.lock().unwrap();
        if tasks.remove(id).is_none() {
            return Err(MarketplaceError::task_not_found(id));
        }
        Ok(())
    }

    async fn exists_by_category(&self, category_id: &str) -> MarketplaceResult<bool> {
        let tasks = self.tasks.lock().unwrap();
        Ok(tasks.values().any(|t| t.category_id == category_id))
    }
}

/// Mock implementation of MessageRepository for testing
///
/// `fail_next_batch` lets tests verify that a failing batch leaves
/// nothing committed.
#[derive(Debug, Clone, Default)]
pub struct MockMessageRepository {
    messages: Arc<Mutex<BTreeMap<i64, Message>>>,
    next_id: Arc<Mutex<i64>>,
    fail_next_batch: Arc<AtomicBool>,
}

impl MockMessageRepository {
    pub fn new() -> Self {
        Self {
            messages: Arc::new(Mutex::new(BTreeMap::new())),
            next_id: Arc::new(Mutex::new(1)),
            fail_next_batch: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn with_messages(messages: Vec<Message>) -> Self {
        let next = messages.iter().map(|m| m.id).max().unwrap_or(0) + 1;
        let map = messages.into_iter().map(|m| (m.id, m)).collect();
        Self {
            messages: Arc::new(Mutex::new(map)),
            next_id: Arc::new(Mutex::new(next)),
            fail_next_batch: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn fail_next_batch(&self) {
        self.fail_next_batch.store(true, Ordering::SeqCst);
    }

    pub fn count(&self) -> usize {
        self.messages.lock().unwrap().len()
    }

    pub fn get_all_messages(&self) -> Vec<Message> {
        self.messages.lock().unwrap().values().cloned().collect()
    }
}

#[async_trait]
impl MessageRepository for MockMessageRepository {
    async fn create(&self, message: &Message) -> MarketplaceResult<Message> {
        let mut messages = self.messages.lock().unwrap();
        let mut next_id = self.next_id.lock().unwrap();

        let mut stored = message.clone();
        stored.id = *next_id;
        *next_id += 1;

        messages.insert(stored.id, stored.clone());
        Ok(stored)
    }

    async fn create_batch(&self, batch: &[Message]) -> MarketplaceResult<Vec<Message>> {
        if self.fail_next_batch.swap(false, Ordering::SeqCst) {
            return Err(MarketplaceError::database_error("批量写入失败（测试注入）"));
        }

        let mut messages = self.messages.lock().unwrap();
        let mut next_id = self.next_id.lock().unwrap();

        let mut stored_batch = Vec::with_capacity(batch.len());
        for message in batch {
            let mut stored = message.clone();
            stored.id = *next_id;
            *next_id += 1;
            messages.insert(stored.id, stored.clone());
            stored_batch.push(stored);
        }
        Ok(stored_batch)
    }

    async fn find_by_id(&self, id: i64) -> MarketplaceResult<Option<Message>> {
        Ok(self.messages.lock().unwrap().get(&id).cloned())
    }

    async fn find_all(&self) -> MarketplaceResult<Vec<Message>> {
        Ok(self.messages.lock().unwrap().values().cloned().collect())
    }

    async fn delete(&self, id: i64) -> MarketplaceResult<()> {
        let mut messages = self.messages.lock().unwrap();
        if messages.remove(&id).is_none() {
            return Err(MarketplaceError::message_not_found(id));
        }
        Ok(())
    }
}

/// Mock implementation of CategoryRepository for testing
#[derive(Debug, Clone, Default)]
pub struct MockCategoryRepository {
    categories: Arc<Mutex<BTreeMap<String, Category>>>,
}

impl MockCategoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_categories(categories: Vec<Category>) -> Self {
        let map = categories.into_iter().map(|c| (c.id.clone(), c)).collect();
        Self {
            categories: Arc::new(Mutex::new(map)),
        }
    }

    pub fn count(&self) -> usize {
        self.categories.lock().unwrap().len()
    }
}

#[async_trait]
impl CategoryRepository for MockCategoryRepository {
    async fn create(&self, category: &Category) -> MarketplaceResult<Category> {
        let mut categories = self.categories.lock().unwrap();
        categories.insert(category.id.clone(), category.clone());
        Ok(category.clone())
    }

    async fn find_by_id(&self, id: &str) -> MarketplaceResult<Option<Category>> {
        Ok(self.categories.lock().unwrap().get(id).cloned())
    }

    async fn find_all(&self) -> MarketplaceResult<Vec<Category>> {
        Ok(self.categories.lock().unwrap().values().cloned().collect())
    }

    async fn update(&self, category: &Category) -> MarketplaceResult<()> {
        let mut categories = self.categories.lock().unwrap();
        if !categories.contains_key(&category.id) {
            return Err(MarketplaceError::category_not_found(category.id.clone()));
        }
        categories.insert(category.id.clone(), category.clone());
        Ok(())
    }

    async fn delete(&self, id: &str) -> MarketplaceResult<()> {
        let mut categories = self.categories.lock().unwrap();
        if categories.remove(id).is_none() {
            return Err(MarketplaceError::category_not_found(id));
        }
        Ok(())
    }

    async fn exists(&self, id: &str) -> MarketplaceResult<bool> {
        Ok(self.categories.lock().unwrap().contains_key(id))
    }
}

/// Mock implementation of SocialProfileRepository for testing
#[derive(Debug, Clone, Default)]
pub struct MockSocialProfileRepository {
    profiles: Arc<Mutex<BTreeMap<i64, SocialProfile>>>,
    next_id: Arc<Mutex<i64>>,
}

impl MockSocialProfileRepository {
    pub fn new() -> Self {
        Self {
            profiles: Arc::new(Mutex::new(BTreeMap::new())),
            next_id: Arc::new(Mutex::new(1)),
        }
    }

    pub fn with_profiles(profiles: Vec<SocialProfile>) -> Self {
        let max_id = profiles.iter().map(|p| p.id).max().unwrap_or(0);
        let map = profiles.into_iter().map(|p| (p.id, p)).collect();
        Self {
            profiles: Arc::new(Mutex::new(map)),
            next_id: Arc::new(Mutex::new(max_id + 1)),
        }
    }

    pub fn count(&self) -> usize {
        self.profiles.lock().unwrap().len()
    }
}

#[async_trait]
impl SocialProfileRepository for MockSocialProfileRepository {
    async fn create(&self, profile: &SocialProfile) -> MarketplaceResult<SocialProfile> {
        let mut profiles = self.profiles.lock().unwrap();
        let mut next_id = self.next_id.lock().unwrap();

        let mut stored = profile.clone();
        stored.id = *next_id;
        *next_id += 1;

        profiles.insert(stored.id, stored.clone());
        Ok(stored)
    }

    async fn find_by_id(&self, id: i64) -> MarketplaceResult<Option<SocialProfile>> {
        Ok(self.profiles.lock().unwrap().get(&id).cloned())
    }

    async fn find_all(&self) -> MarketplaceResult<Vec<SocialProfile>> {
        Ok(self.profiles.lock().unwrap().values().cloned().collect())
    }

    async fn update(&self, profile: &SocialProfile) -> MarketplaceResult<()> {
        let mut profiles = self.profiles.lock().unwrap();
        if !profiles.contains_key(&profile.id) {
            return Err(MarketplaceError::profile_not_found(profile.id));
        }
        profiles.insert(profile.id, profile.clone());
        Ok(())
    }

    async fn delete(&self, id: i64) -> MarketplaceResult<()> {
        let mut profiles = self.profiles.lock().unwrap();
        if profiles.remove(&id).is_none() {
            return Err(MarketplaceError::profile_not_found(id));
        }
        Ok(())
    }
}
