use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "room")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub room_type: String,
    #[sea_orm(column_type = "Decimal(Some((10, 2)))")]
    pub room_price: Decimal,
    pub description: Option<String>,
    #[sea_orm(column_type = "Blob")]
    pub photo: Option<Vec<u8>>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::booked_room::Entity")]
    BookedRoom,
}

impl Related<super::booked_room::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BookedRoom.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
