use crate::server::{
    data::participant::ParticipantRepository, model::participant::CreateParticipantParams,
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod delete;
