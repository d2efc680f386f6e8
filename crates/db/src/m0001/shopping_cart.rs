use sea_query::{ColumnDef, ForeignKey, ForeignKeyAction, Index, Table};

use crate::table::{Recipe, ShoppingCart, User};

// One cart entry per (user, recipe); entries go away with their recipe or user.
super::operation!(
    CreateTable,
    Table::create()
        .table(ShoppingCart::Table)
        .col(
            ColumnDef::new(ShoppingCart::UserId)
                .string()
                .not_null()
                .string_len(26),
        )
        .col(
            ColumnDef::new(ShoppingCart::RecipeId)
                .string()
                .not_null()
                .string_len(26),
        )
        .col(ColumnDef::new(ShoppingCart::AddedAt).big_integer().not_null())
        .primary_key(
            Index::create()
                .col(ShoppingCart::UserId)
                .col(ShoppingCart::RecipeId),
        )
        .foreign_key(
            ForeignKey::create()
                .from(ShoppingCart::Table, ShoppingCart::UserId)
                .to(User::Table, User::Id)
                .on_delete(ForeignKeyAction::Cascade),
        )
        .foreign_key(
            ForeignKey::create()
                .from(ShoppingCart::Table, ShoppingCart::RecipeId)
                .to(Recipe::Table, Recipe::Id)
                .on_delete(ForeignKeyAction::Cascade),
        )
        .to_owned(),
    Table::drop().table(ShoppingCart::Table).to_owned()
);
