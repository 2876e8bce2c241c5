use super::*;

/// Tests updating the type and description of a room.
///
/// Expected: Ok(Room) with new type and description and the original price
#[tokio::test]
async fn updates_provided_fields() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = RoomService::new(db);
    let room = service.add_new_room(new_room(Decimal::new(9900, 2))).await?;

    let updated = service
        .update_room(UpdateRoomParam {
            id: room.id,
            room_type: Some("Suite".to_string()),
            description: Some("Renovated".to_string()),
            ..Default::default()
        })
        .await?;

    assert_eq!(updated.room_type, "Suite");
    assert_eq!(updated.description.as_deref(), Some("Renovated"));
    assert_eq!(updated.room_price, Decimal::new(9900, 2));
    assert_eq!(updated.photo, room.photo);

    Ok(())
}

/// Tests that a negative price update is rejected and nothing changes.
///
/// Expected: Err(AppError::BadRequest) with the stored price unchanged
#[tokio::test]
async fn rejects_negative_price() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = RoomService::new(db);
    let room = service.add_new_room(new_room(Decimal::new(9900, 2))).await?;

    let result = service
        .update_room(UpdateRoomParam {
            id: room.id,
            room_price: Some(Decimal::new(-1, 0)),
            ..Default::default()
        })
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));
    let stored = service.get_room_by_id(room.id).await?.unwrap();
    assert_eq!(stored.room_price, Decimal::new(9900, 2));

    Ok(())
}

/// Tests updating a room that does not exist.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn fails_for_nonexistent_room() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = RoomService::new(db)
        .update_room(UpdateRoomParam {
            id: 999,
            room_type: Some("Suite".to_string()),
            ..Default::default()
        })
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
