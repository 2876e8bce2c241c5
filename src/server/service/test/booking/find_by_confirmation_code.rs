use super::*;

/// Tests finding a booking by a known confirmation code.
///
/// Expected: Ok(BookedRoom) with code "ABC123"
#[tokio::test]
async fn finds_booking_for_known_code() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let room = factory::room::create_room(db).await?;
    let created = factory::booked_room::BookedRoomFactory::new(db, room.id)
        .confirmation_code("ABC123")
        .build()
        .await?;

    let booking = BookingService::new(db)
        .find_by_confirmation_code("ABC123")
        .await?;

    assert_eq!(booking.id, created.id);
    assert_eq!(booking.confirmation_code, "ABC123");

    Ok(())
}

/// Tests looking up an unknown confirmation code.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn fails_for_unknown_code() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = BookingService::new(db)
        .find_by_confirmation_code("UNKNOWN")
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
