//! Contents table migration.
//!
//! `type` is free text rather than an enum so rows with unknown types can be
//! stored and rejected at provisioning time.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();
        db.execute_unprepared(CONTENTS_SQL).await?;
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();
        db.execute_unprepared("DROP TABLE IF EXISTS contents CASCADE;")
            .await?;
        Ok(())
    }
}

const CONTENTS_SQL: &str = r"
CREATE TABLE contents (
    id VARCHAR(64) PRIMARY KEY,
    title VARCHAR(255) NOT NULL,
    cover VARCHAR(1024) NOT NULL DEFAULT '',
    description TEXT NOT NULL DEFAULT '',
    total_likes BIGINT NOT NULL DEFAULT 0,
    type VARCHAR(32),
    url TEXT,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    updated_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    CONSTRAINT chk_total_likes_non_negative CHECK (total_likes >= 0)
);

-- Index for listing newest content first
CREATE INDEX idx_contents_created ON contents(created_at DESC);
";
