use super::*;

/// Tests reading a reservation's history in insertion order.
///
/// Expected: entries oldest first, scoped to the reservation
#[tokio::test]
async fn returns_entries_oldest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (requester, room, reservation) =
        factory::helpers::create_reservation_with_dependencies(db).await?;
    let other = factory::create_reservation(db, requester.id, room.id).await?;

    for (id, action, new_status) in [
        (reservation.id, ApprovalAction::Created, ReservationStatus::Pending),
        (other.id, ApprovalAction::Created, ReservationStatus::Pending),
        (reservation.id, ApprovalAction::Cancelled, ReservationStatus::Cancelled),
    ] {
        ApprovalHistoryRepository::insert(
            db,
            &NewHistoryEntry {
                reservation_id: id,
                actor_id: requester.id,
                action,
                previous_status: None,
                new_status,
                reason: None,
            },
        )
        .await?;
    }

    let repo = ApprovalHistoryRepository::new(db);
    let actions: Vec<ApprovalAction> = repo
        .get_by_reservation(reservation.id)
        .await?
        .into_iter()
        .map(|e| e.action)
        .collect();

    assert_eq!(
        actions,
        vec![ApprovalAction::Created, ApprovalAction::Cancelled]
    );

    Ok(())
}
