use sea_query::{ColumnDef, Index, Table};

use crate::table::Tag;

super::operation!(
    CreateTable,
    Table::create()
        .table(Tag::Table)
        .col(
            ColumnDef::new(Tag::Id)
                .string()
                .not_null()
                .string_len(26)
                .primary_key(),
        )
        .col(ColumnDef::new(Tag::Name).string().not_null().string_len(32))
        .col(ColumnDef::new(Tag::Slug).string().not_null().string_len(32))
        .to_owned(),
    Table::drop().table(Tag::Table).to_owned()
);

super::operation!(
    CreateUkName,
    Index::create()
        .name("uk_tag_name")
        .table(Tag::Table)
        .unique()
        .col(Tag::Name)
        .to_owned(),
    Index::drop().name("uk_tag_name").table(Tag::Table).to_owned()
);

super::operation!(
    CreateUkSlug,
    Index::create()
        .name("uk_tag_slug")
        .table(Tag::Table)
        .unique()
        .col(Tag::Slug)
        .to_owned(),
    Index::drop().name("uk_tag_slug").table(Tag::Table).to_owned()
);
