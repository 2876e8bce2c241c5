use super::*;

/// Tests listing a guest's bookings across rooms.
///
/// Expected: Ok(Vec) containing only bookings made with the guest's email
#[tokio::test]
async fn returns_bookings_for_guest() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first_room = factory::room::create_room(db).await?;
    let second_room = factory::room::create_room(db).await?;
    factory::booked_room::BookedRoomFactory::new(db, first_room.id)
        .guest_email("guest@example.com")
        .build()
        .await?;
    factory::booked_room::BookedRoomFactory::new(db, second_room.id)
        .guest_email("guest@example.com")
        .build()
        .await?;
    factory::booked_room::BookedRoomFactory::new(db, second_room.id)
        .guest_email("someone.else@example.com")
        .build()
        .await?;

    let bookings = BookingRepository::new(db)
        .find_by_guest_email("guest@example.com")
        .await?;

    assert_eq!(bookings.len(), 2);
    assert!(bookings
        .iter()
        .all(|booking| booking.guest_email == "guest@example.com"));

    Ok(())
}
