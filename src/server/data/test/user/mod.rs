use crate::server::{data::user::UserRepository, model::user::CreateUserParam};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};
