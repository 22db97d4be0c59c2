//! Platform user accounts (admins, doctors, patients).

use std::time::Duration;

use chrono::Utc;
use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::errors::store_error::Result;
use crate::structs::user::{CreateUserInput, UpdateUserInput, User, UserRole};
use crate::validation::{validate_create_user, validate_update_user};
use crate::{seeded_at, simulate_latency};

#[derive(Debug)]
struct UserTable {
    users: Vec<User>,
    next_id: u64,
}

/// In-memory user store. Reads return owned copies.
#[derive(Debug)]
pub struct UserStore {
    table: RwLock<UserTable>,
    latency: Duration,
}

impl Default for UserStore {
    fn default() -> Self {
        Self::with_users(seed_users())
    }
}

impl UserStore {
    /// Store pre-filled with the demo accounts.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_users(users: Vec<User>) -> Self {
        let next_id = users
            .iter()
            .filter_map(|u| u.id.parse::<u64>().ok())
            .max()
            .unwrap_or(0)
            + 1;
        Self {
            table: RwLock::new(UserTable { users, next_id }),
            latency: Duration::ZERO,
        }
    }

    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    pub async fn list(&self) -> Vec<User> {
        simulate_latency(self.latency).await;
        self.table.read().await.users.clone()
    }

    pub async fn get(&self, id: &str) -> Option<User> {
        simulate_latency(self.latency).await;
        self.table.read().await.users.iter().find(|u| u.id == id).cloned()
    }

    pub async fn create(&self, input: CreateUserInput) -> Result<User> {
        validate_create_user(&input)?;
        simulate_latency(self.latency).await;

        let mut table = self.table.write().await;
        let user = User {
            id: table.next_id.to_string(),
            email: input.email,
            name: input.name,
            role: input.role,
            avatar: input.avatar.filter(|a| !a.is_empty()),
            created_at: Utc::now(),
        };
        table.next_id += 1;
        table.users.push(user.clone());

        info!(target: "clinic_store::users", id = %user.id, role = ?user.role, "user created");
        Ok(user)
    }

    /// `Ok(None)` when the id is unknown. An empty `avatar` clears it.
    pub async fn update(&self, id: &str, input: UpdateUserInput) -> Result<Option<User>> {
        validate_update_user(&input)?;
        simulate_latency(self.latency).await;

        let mut table = self.table.write().await;
        let Some(user) = table.users.iter_mut().find(|u| u.id == id) else {
            debug!(target: "clinic_store::users", id, "update: unknown id");
            return Ok(None);
        };

        if let Some(email) = input.email {
            user.email = email;
        }
        if let Some(name) = input.name {
            user.name = name;
        }
        if let Some(role) = input.role {
            user.role = role;
        }
        if let Some(avatar) = input.avatar {
            user.avatar = (!avatar.is_empty()).then_some(avatar);
        }

        Ok(Some(user.clone()))
    }

    /// `false` when the id is unknown.
    pub async fn delete(&self, id: &str) -> bool {
        simulate_latency(self.latency).await;

        let mut table = self.table.write().await;
        let before = table.users.len();
        table.users.retain(|u| u.id != id);
        let removed = table.users.len() != before;

        if removed {
            info!(target: "clinic_store::users", id, "user deleted");
        }
        removed
    }
}

fn seed_users() -> Vec<User> {
    let user = |id: &str, email: &str, name: &str, role: UserRole, created| User {
        id: id.into(),
        email: email.into(),
        name: name.into(),
        role,
        avatar: None,
        created_at: created,
    };

    vec![
        user("1", "admin@medora247.com", "Admin User", UserRole::Admin, seeded_at(2025, 1, 1, 0)),
        user(
            "2",
            "amelia.ruth@medora247.com",
            "Dr. Amelia Ruth",
            UserRole::Doctor,
            seeded_at(2025, 1, 15, 0),
        ),
        user(
            "3",
            "john.smith@medora247.com",
            "Dr. John Smith",
            UserRole::Doctor,
            seeded_at(2025, 2, 1, 0),
        ),
        user("4", "jane.doe@example.com", "Jane Doe", UserRole::Patient, seeded_at(2025, 2, 10, 0)),
    ]
}
