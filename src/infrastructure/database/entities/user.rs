//! User entity for database

use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;

/// State (UF) code
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(2))")]
pub enum StateCode {
    #[sea_orm(string_value = "RS")]
    Rs,
    #[sea_orm(string_value = "SP")]
    Sp,
    #[sea_orm(string_value = "RJ")]
    Rj,
    #[sea_orm(string_value = "BA")]
    Ba,
    #[sea_orm(string_value = "PA")]
    Pa,
    #[sea_orm(string_value = "SC")]
    Sc,
}

/// Address type
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(20))")]
pub enum AddressType {
    #[sea_orm(string_value = "house")]
    House,
    #[sea_orm(string_value = "apartment")]
    Apartment,
    #[sea_orm(string_value = "job")]
    Job,
}

/// User model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub email: String,
    pub street: Option<String>,
    pub city: Option<String>,
    pub state: StateCode,
    pub postal_code: Option<String>,
    pub address_type: AddressType,
    pub created_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
