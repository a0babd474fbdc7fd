// Copyright (c) 2026 deskrs
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use sea_orm_migration::prelude::*;

/// 数据库迁移命令行入口
#[async_std::main]
async fn main() {
    cli::run_cli(migration::Migrator).await;
}
