use sea_query::{ColumnDef, Index, Table};

use crate::table::User;

super::operation!(
    CreateTable,
    Table::create()
        .table(User::Table)
        .col(
            ColumnDef::new(User::Id)
                .string()
                .not_null()
                .string_len(26)
                .primary_key(),
        )
        .col(
            ColumnDef::new(User::Email)
                .string()
                .not_null()
                .string_len(254),
        )
        .col(
            ColumnDef::new(User::Username)
                .string()
                .not_null()
                .string_len(150),
        )
        .col(
            ColumnDef::new(User::FirstName)
                .string()
                .not_null()
                .string_len(150),
        )
        .col(
            ColumnDef::new(User::LastName)
                .string()
                .not_null()
                .string_len(150),
        )
        .col(ColumnDef::new(User::Password).string().not_null())
        .col(ColumnDef::new(User::CreatedAt).big_integer().not_null())
        .to_owned(),
    Table::drop().table(User::Table).to_owned()
);

super::operation!(
    CreateUkEmail,
    Index::create()
        .name("uk_user_email")
        .table(User::Table)
        .unique()
        .col(User::Email)
        .to_owned(),
    Index::drop()
        .name("uk_user_email")
        .table(User::Table)
        .to_owned()
);

super::operation!(
    CreateUkUsername,
    Index::create()
        .name("uk_user_username")
        .table(User::Table)
        .unique()
        .col(User::Username)
        .to_owned(),
    Index::drop()
        .name("uk_user_username")
        .table(User::Table)
        .to_owned()
);
