use sea_orm_migration::{prelude::*, schema::*};

use super::m20250601_000001_create_room_table::Room;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(BookedRoom::Table)
                    .if_not_exists()
                    .col(pk_auto(BookedRoom::Id))
                    .col(integer(BookedRoom::RoomId))
                    .col(string(BookedRoom::GuestFullName))
                    .col(string(BookedRoom::GuestEmail))
                    .col(date(BookedRoom::CheckInDate))
                    .col(date(BookedRoom::CheckOutDate))
                    .col(integer(BookedRoom::NumOfAdults))
                    .col(integer(BookedRoom::NumOfChildren))
                    .col(integer(BookedRoom::TotalNumOfGuests))
                    .col(string_uniq(BookedRoom::ConfirmationCode))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_booked_room_room_id")
                            .from(BookedRoom::Table, BookedRoom::RoomId)
                            .to(Room::Table, Room::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_booked_room_room_id")
                    .table(BookedRoom::Table)
                    .col(BookedRoom::RoomId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_booked_room_guest_email")
                    .table(BookedRoom::Table)
                    .col(BookedRoom::GuestEmail)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(BookedRoom::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum BookedRoom {
    Table,
    Id,
    RoomId,
    GuestFullName,
    GuestEmail,
    CheckInDate,
    CheckOutDate,
    NumOfAdults,
    NumOfChildren,
    TotalNumOfGuests,
    ConfirmationCode,
}
