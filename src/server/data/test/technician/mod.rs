use crate::server::data::technician::TechnicianRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};
