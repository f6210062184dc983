use sea_orm::TransactionTrait;

use super::*;

/// Tests creating a reservation.
///
/// Verifies that the reservation is stored as pending with the routed technician and
/// that a `Created` history entry is written in the same operation.
///
/// Expected: Ok(Reservation) and one history entry
#[tokio::test]
async fn creates_pending_reservation_with_history() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, technician, room) = factory::helpers::create_room_with_dependencies(db).await?;
    let requester = factory::create_user(db).await?;

    let mut new = new_reservation(requester.id, room.id, "RES-20300304-ABC123");
    new.assigned_technician_id = Some(technician.id);

    let repo = ReservationRepository::new(db);
    let reservation = repo.create(&new, requester.id).await?;

    assert_eq!(reservation.number, "RES-20300304-ABC123");
    assert_eq!(reservation.status, ReservationStatus::Pending);
    assert_eq!(reservation.assigned_technician_id, Some(technician.id));
    assert!(reservation.updated_at.is_none());

    let entries = entity::prelude::ApprovalHistory::find().all(db).await?;
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].action, ApprovalAction::Created);
    assert_eq!(entries[0].actor_id, requester.id);

    Ok(())
}

/// Tests creating a reservation inside a caller's transaction.
///
/// Verifies that a booking check on the same transaction sees the new reservation
/// and that rolling the transaction back discards it with its history entry.
///
/// Expected: one blocking reservation inside the transaction, none after rollback
#[tokio::test]
async fn creates_within_caller_transaction() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, _, room) = factory::helpers::create_room_with_dependencies(db).await?;
    let requester = factory::create_user(db).await?;
    let new = new_reservation(requester.id, room.id, "RES-20300304-TXN001");
    let statuses = [ReservationStatus::Pending, ReservationStatus::Approved];

    let txn = db.begin().await?;
    let repo = ReservationRepository::new(&txn);
    repo.create(&new, requester.id).await?;

    let blocking = repo
        .get_blocking(&[room.id], &statuses, date(2030, 3, 4), date(2030, 3, 4), None)
        .await?;
    assert_eq!(blocking.len(), 1);
    txn.rollback().await?;

    let blocking = ReservationRepository::new(db)
        .get_blocking(&[room.id], &statuses, date(2030, 3, 4), date(2030, 3, 4), None)
        .await?;
    assert!(blocking.is_empty());
    assert!(entity::prelude::ApprovalHistory::find()
        .all(db)
        .await?
        .is_empty());

    Ok(())
}

/// Tests that requested equipment and services are attached.
///
/// Expected: detail queries return the requested lines with names
#[tokio::test]
async fn attaches_equipment_and_services() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, _, room) = factory::helpers::create_room_with_dependencies(db).await?;
    let requester = factory::create_user(db).await?;
    let projector = factory::create_equipment_type(db, "Projector").await?;
    let coffee = factory::create_additional_service(db, "Coffee").await?;

    let mut new = new_reservation(requester.id, room.id, "RES-20300304-EQUIP1");
    new.params.equipment = vec![RequestedEquipment {
        equipment_type_id: projector.id,
        quantity: 2,
    }];
    new.params.services = vec![RequestedService {
        additional_service_id: coffee.id,
        quantity: Some(10),
    }];

    let repo = ReservationRepository::new(db);
    let reservation = repo.create(&new, requester.id).await?;

    let equipment = repo.get_equipment(reservation.id).await?;
    assert_eq!(equipment.len(), 1);
    assert_eq!(equipment[0].name, "Projector");
    assert_eq!(equipment[0].quantity, 2);

    let services = repo.get_services(reservation.id).await?;
    assert_eq!(services.len(), 1);
    assert_eq!(services[0].name, "Coffee");
    assert_eq!(services[0].quantity, Some(10));

    Ok(())
}

/// Tests that a failing line item rolls back the whole creation.
///
/// Verifies that referencing an unknown equipment type leaves neither a reservation
/// nor a history entry behind.
///
/// Expected: Err(DbErr) and empty tables
#[tokio::test]
async fn rolls_back_on_invalid_equipment() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, _, room) = factory::helpers::create_room_with_dependencies(db).await?;
    let requester = factory::create_user(db).await?;

    let mut new = new_reservation(requester.id, room.id, "RES-20300304-BROKEN");
    new.params.equipment = vec![RequestedEquipment {
        equipment_type_id: 9999,
        quantity: 1,
    }];

    let repo = ReservationRepository::new(db);
    let result = repo.create(&new, requester.id).await;

    assert!(result.is_err());
    assert!(!repo.number_exists("RES-20300304-BROKEN").await?);
    assert!(entity::prelude::ApprovalHistory::find().all(db).await?.is_empty());

    Ok(())
}

/// Tests that reservation numbers are unique.
///
/// Expected: Err(DbErr) on the second insert
#[tokio::test]
async fn fails_on_duplicate_number() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, _, room) = factory::helpers::create_room_with_dependencies(db).await?;
    let requester = factory::create_user(db).await?;

    let repo = ReservationRepository::new(db);
    repo.create(&new_reservation(requester.id, room.id, "RES-DUP"), requester.id)
        .await?;
    let result = repo
        .create(&new_reservation(requester.id, room.id, "RES-DUP"), requester.id)
        .await;

    assert!(result.is_err());

    Ok(())
}
