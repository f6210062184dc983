use super::*;

/// Tests the pending queue of a technician.
///
/// Verifies that a technician sees pending reservations in the rooms they are
/// responsible for, including requester details and participant counts, and nothing
/// from other rooms.
///
/// Expected: one item for the technician's room
#[tokio::test]
async fn technician_sees_own_rooms() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (department, technician_user, technician, room) =
        factory::helpers::create_room_with_dependencies(db).await?;
    let (_, _, _, other_room) = factory::helpers::create_room_with_dependencies(db).await?;
    let requester = UserFactory::new(db)
        .first_name("Grace")
        .last_name("Hopper")
        .department_id(Some(department.id))
        .build()
        .await?;
    let mine = factory::create_reservation(db, requester.id, room.id).await?;
    factory::create_reservation(db, requester.id, other_room.id).await?;
    factory::create_participant(db, mine.id, "A", "a@example.com").await?;
    factory::create_participant(db, mine.id, "B", "b@example.com").await?;

    let notifier = RecordingNotifier::default();
    let pending = ReservationService::new(db, &notifier)
        .pending_for_approver(&actor(technician_user))
        .await?;

    assert_eq!(pending.len(), 1);
    let item = &pending[0];
    assert_eq!(item.reservation.id, mine.id);
    assert_eq!(item.room_name, room.name);
    assert_eq!(item.requester.name, "Grace Hopper");
    assert_eq!(item.requester.department.as_deref(), Some(department.name.as_str()));
    assert_eq!(item.technician.as_ref().map(|t| t.id), Some(technician.id));
    assert_eq!(item.participant_count, 2);

    Ok(())
}

/// Tests pending queues by role.
///
/// Verifies that admins see every pending reservation, department heads see their
/// department's rooms and regular users see nothing. Decided reservations never appear.
///
/// Expected: admin 2, head 1, user 0
#[tokio::test]
async fn scopes_pending_queue_by_role() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (department, _, _, room) = factory::helpers::create_room_with_dependencies(db).await?;
    let (_, _, _, other_room) = factory::helpers::create_room_with_dependencies(db).await?;
    let requester = factory::create_user(db).await?;
    factory::create_reservation(db, requester.id, room.id).await?;
    factory::create_reservation(db, requester.id, other_room.id).await?;
    ReservationFactory::new(db, requester.id, room.id)
        .status(ReservationStatus::Approved)
        .event_date(date(2030, 7, 1))
        .build()
        .await?;

    let admin = actor(factory::create_user_with_role(db, UserRole::Admin).await?);
    let head = actor(
        UserFactory::new(db)
            .role(UserRole::DepartmentHead)
            .department_id(Some(department.id))
            .build()
            .await?,
    );

    let notifier = RecordingNotifier::default();
    let service = ReservationService::new(db, &notifier);

    assert_eq!(service.pending_for_approver(&admin).await?.len(), 2);

    let head_queue = service.pending_for_approver(&head).await?;
    assert_eq!(head_queue.len(), 1);
    assert_eq!(head_queue[0].reservation.room_id, room.id);

    assert!(service
        .pending_for_approver(&actor(requester))
        .await?
        .is_empty());

    Ok(())
}
