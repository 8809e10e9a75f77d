//! User resource - seed data, email uniqueness and projection.

use chrono::{DateTime, Utc};

use super::crud::Resource;
use super::ResourceService;
use crate::domain::{CreateUser, UpdateUser, User, UserResponse};

/// User service: the generic engine specialized for users
pub type UserService = ResourceService<UserResource>;

/// Users are unique by email and expose neither timestamp.
pub struct UserResource;

impl Resource for UserResource {
    type Entity = User;
    type Response = UserResponse;
    type Create = CreateUser;
    type Update = UpdateUser;

    const NAME: &'static str = "User";
    const DUPLICATE_ON_CREATE: &'static str = "User with this email already exists";
    const DUPLICATE_ON_UPDATE: &'static str = "Email already in use by another user";

    fn seed() -> Vec<User> {
        let now = Utc::now();
        vec![
            seed_user("1", "John Doe", "john@seed-data.com", 30, now),
            seed_user("2", "Jane Smith", "jane@seed-data.com", 25, now),
        ]
    }

    fn unique_key(user: &User) -> &str {
        &user.email
    }

    fn create_key(data: &CreateUser) -> &str {
        &data.email
    }

    fn update_key(updates: &UpdateUser) -> Option<&str> {
        updates.email.as_deref()
    }

    fn build(id: String, data: CreateUser, now: DateTime<Utc>) -> User {
        User::new(id, data, now)
    }

    fn merge(user: &mut User, updates: UpdateUser) {
        user.apply(updates);
    }

    fn project(user: &User) -> UserResponse {
        UserResponse::from(user)
    }
}

fn seed_user(id: &str, name: &str, email: &str, age: u32, now: DateTime<Utc>) -> User {
    User::new(id.to_string(), CreateUser::new(name, email, age), now)
}
