use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Purchase orders; timestamps are naive and hold UTC
        manager
            .create_table(
                Table::create()
                    .table(PurchaseOrderList::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(PurchaseOrderList::PoId)
                            .string_len(32)
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(PurchaseOrderList::MillName).text().null())
                    .col(
                        ColumnDef::new(PurchaseOrderList::ConsigneeName)
                            .text()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(PurchaseOrderList::IncomingOrderTimestamp)
                            .timestamp()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(PurchaseOrderList::OutgoingOrderTimestamp)
                            .timestamp()
                            .null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(HawaConsignee::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(HawaConsignee::ConsigneeId)
                            .integer()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(HawaConsignee::ConsigneeName).text().null())
                    .col(
                        ColumnDef::new(HawaConsignee::ConsigneeAddress)
                            .text()
                            .null(),
                    )
                    .col(ColumnDef::new(HawaConsignee::ConsigneeGstin).text().null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(HawaMillName::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(HawaMillName::MillId)
                            .integer()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(HawaMillName::MillName).text().null())
                    .col(ColumnDef::new(HawaMillName::MillEmail).text().null())
                    .col(ColumnDef::new(HawaMillName::MillKeywords).text().null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(DebtorList::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(DebtorList::ConsigneeName)
                            .text()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(DebtorList::ConsigneeContactName)
                            .text()
                            .null(),
                    )
                    .col(ColumnDef::new(DebtorList::PhoneNumber).text().null())
                    .col(ColumnDef::new(DebtorList::FollowUpDate).date().null())
                    .col(ColumnDef::new(DebtorList::PaymentStatus).text().null())
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(DebtorList::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(HawaMillName::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(HawaConsignee::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(PurchaseOrderList::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum PurchaseOrderList {
    #[sea_orm(iden = "Purchase_Order_List")]
    Table,
    #[sea_orm(iden = "PO_ID")]
    PoId,
    #[sea_orm(iden = "Mill_name")]
    MillName,
    #[sea_orm(iden = "Consignee_name")]
    ConsigneeName,
    #[sea_orm(iden = "Incoming_order_timestamp")]
    IncomingOrderTimestamp,
    #[sea_orm(iden = "Outgoing_order_timestamp")]
    OutgoingOrderTimestamp,
}

#[derive(DeriveIden)]
enum HawaConsignee {
    #[sea_orm(iden = "Hawa_Consignee")]
    Table,
    #[sea_orm(iden = "Consignee_id")]
    ConsigneeId,
    #[sea_orm(iden = "Consignee_name")]
    ConsigneeName,
    #[sea_orm(iden = "Consignee_address")]
    ConsigneeAddress,
    #[sea_orm(iden = "Consignee_GSTIN")]
    ConsigneeGstin,
}

#[derive(DeriveIden)]
enum HawaMillName {
    #[sea_orm(iden = "Hawa_MillName")]
    Table,
    #[sea_orm(iden = "Mill_id")]
    MillId,
    #[sea_orm(iden = "Mill_name")]
    MillName,
    #[sea_orm(iden = "Mill_email")]
    MillEmail,
    #[sea_orm(iden = "Mill_keywords")]
    MillKeywords,
}

#[derive(DeriveIden)]
enum DebtorList {
    #[sea_orm(iden = "debtor_list")]
    Table,
    #[sea_orm(iden = "Consignee_name")]
    ConsigneeName,
    #[sea_orm(iden = "Consignee_Contact_name")]
    ConsigneeContactName,
    PhoneNumber,
    FollowUpDate,
    PaymentStatus,
}
