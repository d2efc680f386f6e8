use sea_query::{ColumnDef, ForeignKey, ForeignKeyAction, Index, Table};

use crate::table::{Subscription, User};

super::operation!(
    CreateTable,
    Table::create()
        .table(Subscription::Table)
        .col(
            ColumnDef::new(Subscription::UserId)
                .string()
                .not_null()
                .string_len(26),
        )
        .col(
            ColumnDef::new(Subscription::AuthorId)
                .string()
                .not_null()
                .string_len(26),
        )
        .col(
            ColumnDef::new(Subscription::CreatedAt)
                .big_integer()
                .not_null(),
        )
        .primary_key(
            Index::create()
                .col(Subscription::UserId)
                .col(Subscription::AuthorId),
        )
        .foreign_key(
            ForeignKey::create()
                .from(Subscription::Table, Subscription::UserId)
                .to(User::Table, User::Id)
                .on_delete(ForeignKeyAction::Cascade),
        )
        .foreign_key(
            ForeignKey::create()
                .from(Subscription::Table, Subscription::AuthorId)
                .to(User::Table, User::Id)
                .on_delete(ForeignKeyAction::Cascade),
        )
        .to_owned(),
    Table::drop().table(Subscription::Table).to_owned()
);

super::operation!(
    CreateIdxAuthor,
    Index::create()
        .name("idx_subscription_author")
        .table(Subscription::Table)
        .col(Subscription::AuthorId)
        .to_owned(),
    Index::drop()
        .name("idx_subscription_author")
        .table(Subscription::Table)
        .to_owned()
);
