use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Columns written back by the voice-AI collection workflow
        manager
            .alter_table(
                Table::alter()
                    .table(DebtorList::Table)
                    .add_column(ColumnDef::new(DebtorList::CallTranscript).text().null())
                    .add_column(ColumnDef::new(DebtorList::CallSummary).text().null())
                    .add_column(ColumnDef::new(DebtorList::CallRecording).text().null())
                    .add_column(ColumnDef::new(DebtorList::CallCount).integer().null())
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .alter_table(
                Table::alter()
                    .table(DebtorList::Table)
                    .drop_column(DebtorList::CallTranscript)
                    .drop_column(DebtorList::CallSummary)
                    .drop_column(DebtorList::CallRecording)
                    .drop_column(DebtorList::CallCount)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum DebtorList {
    #[sea_orm(iden = "debtor_list")]
    Table,
    CallTranscript,
    CallSummary,
    CallRecording,
    CallCount,
}
