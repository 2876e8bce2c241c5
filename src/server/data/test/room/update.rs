use super::*;

/// Tests that only provided fields are changed.
///
/// Verifies that updating the price leaves the type, description and photo untouched.
///
/// Expected: Ok(Some(Room)) with the new price and the original other fields
#[tokio::test]
async fn updates_only_provided_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let room = factory::room::RoomFactory::new(db)
        .room_type("Double")
        .description(Some("Garden view".to_string()))
        .photo(vec![1, 2, 3])
        .build()
        .await?;

    let updated = RoomRepository::new(db)
        .update(UpdateRoomParam {
            id: room.id,
            room_price: Some(Decimal::new(15000, 2)),
            ..Default::default()
        })
        .await?
        .unwrap();

    assert_eq!(updated.room_price, Decimal::new(15000, 2));
    assert_eq!(updated.room_type, "Double");
    assert_eq!(updated.description.as_deref(), Some("Garden view"));
    assert_eq!(updated.photo, Some(vec![1, 2, 3]));

    Ok(())
}

/// Tests replacing the photo of a room.
///
/// Expected: Ok(Some(Room)) with the new photo bytes
#[tokio::test]
async fn replaces_photo() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let room = factory::room::create_room(db).await?;

    let updated = RoomRepository::new(db)
        .update(UpdateRoomParam {
            id: room.id,
            photo: Some(vec![9, 9]),
            ..Default::default()
        })
        .await?
        .unwrap();

    assert_eq!(updated.photo, Some(vec![9, 9]));

    Ok(())
}

/// Tests updating a room that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_nonexistent_room() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = RoomRepository::new(db)
        .update(UpdateRoomParam {
            id: 999,
            room_type: Some("Suite".to_string()),
            ..Default::default()
        })
        .await?;

    assert!(result.is_none());

    Ok(())
}
