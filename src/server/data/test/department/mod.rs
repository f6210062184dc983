use crate::server::data::department::DepartmentRepository;
use sea_orm::DbErr;
use test_utils::builder::TestBuilder;

mod create;
mod get_all;
