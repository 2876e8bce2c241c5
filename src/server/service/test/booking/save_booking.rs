use super::*;

/// Tests saving a valid booking.
///
/// Verifies that the booking is persisted for the room with a generated ten character
/// confirmation code and the guest total.
///
/// Expected: Ok(BookedRoom) findable by its confirmation code
#[tokio::test]
async fn saves_booking_with_confirmation_code() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let room = factory::room::create_room(db).await?;
    let service = BookingService::new(db);

    let booking = service.save_booking(room.id, request(date(1), date(4))).await?;

    assert_eq!(booking.room_id, room.id);
    assert_eq!(booking.total_num_of_guests, 3);
    assert_eq!(booking.confirmation_code.len(), 10);
    assert!(booking
        .confirmation_code
        .chars()
        .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit()));

    let found = service
        .find_by_confirmation_code(&booking.confirmation_code)
        .await?;
    assert_eq!(found, booking);

    Ok(())
}

/// Tests that a check-out date before check-in is rejected.
///
/// The room ID does not exist, so reaching persistence would yield NotFound instead.
///
/// Expected: Err(AppError::BadRequest) and no booking stored
#[tokio::test]
async fn rejects_check_out_before_check_in() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = BookingService::new(db)
        .save_booking(999, request(date(10), date(5)))
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));
    assert!(entity::prelude::BookedRoom::find().all(db).await?.is_empty());

    Ok(())
}

/// Tests that a zero-night stay is rejected.
///
/// Expected: Err(AppError::BadRequest)
#[tokio::test]
async fn rejects_equal_check_in_and_check_out() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let room = factory::room::create_room(db).await?;

    let result = BookingService::new(db)
        .save_booking(room.id, request(date(5), date(5)))
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests booking a room that does not exist.
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

    let result = BookingService::new(db)
        .save_booking(999, request(date(1), date(3)))
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests that a stay overlapping an existing booking is rejected.
///
/// Expected: Err(AppError::BadRequest) and only the original booking stored
#[tokio::test]
async fn rejects_overlapping_booking() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let room = factory::room::create_room(db).await?;
    factory::booked_room::create_booking_for_dates(db, room.id, date(10), date(15)).await?;

    let service = BookingService::new(db);
    let result = service.save_booking(room.id, request(date(14), date(16))).await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));
    assert_eq!(service.get_all_bookings_by_room_id(room.id).await?.len(), 1);

    Ok(())
}

/// Tests that back-to-back stays are accepted.
///
/// Expected: Ok(BookedRoom) for a stay starting on the existing check-out date
#[tokio::test]
async fn accepts_back_to_back_booking() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let room = factory::room::create_room(db).await?;
    factory::booked_room::create_booking_for_dates(db, room.id, date(10), date(15)).await?;

    let service = BookingService::new(db);
    service.save_booking(room.id, request(date(15), date(18))).await?;
    service.save_booking(room.id, request(date(7), date(10))).await?;

    assert_eq!(service.get_all_bookings_by_room_id(room.id).await?.len(), 3);

    Ok(())
}

/// Tests that bookings of other rooms do not block a room.
///
/// Expected: Ok(BookedRoom)
#[tokio::test]
async fn ignores_bookings_of_other_rooms() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let room = factory::room::create_room(db).await?;
    let other_room = factory::room::create_room(db).await?;
    factory::booked_room::create_booking_for_dates(db, other_room.id, date(1), date(30)).await?;

    let result = BookingService::new(db)
        .save_booking(room.id, request(date(5), date(8)))
        .await;

    assert!(result.is_ok());

    Ok(())
}

/// Tests that a negative guest count is rejected before any write.
///
/// Expected: Err(AppError::BadRequest) and no booking stored
#[tokio::test]
async fn rejects_negative_guest_count() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let room = factory::room::create_room(db).await?;
    let mut negative = request(date(1), date(3));
    negative.num_of_children = -1;

    let result = BookingService::new(db).save_booking(room.id, negative).await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));
    assert!(entity::prelude::BookedRoom::find().all(db).await?.is_empty());

    Ok(())
}

/// Tests that a guest total that does not fit in an `i32` is rejected.
///
/// Expected: Err(AppError::BadRequest) and no booking stored
#[tokio::test]
async fn rejects_overflowing_guest_total() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let room = factory::room::create_room(db).await?;
    let mut oversized = request(date(1), date(3));
    oversized.num_of_adults = i32::MAX;
    oversized.num_of_children = 1;

    let result = BookingService::new(db).save_booking(room.id, oversized).await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));
    assert!(entity::prelude::BookedRoom::find().all(db).await?.is_empty());

    Ok(())
}
