use super::*;

/// Tests removing a participant.
///
/// Expected: Ok(true) then Ok(false) on a second attempt
#[tokio::test]
async fn deletes_participant_once() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, reservation) = factory::helpers::create_reservation_with_dependencies(db).await?;
    let participant =
        factory::create_participant(db, reservation.id, "Guest", "guest@example.com").await?;

    let repo = ParticipantRepository::new(db);

    assert!(repo.delete(participant.id).await?);
    assert!(!repo.delete(participant.id).await?);
    assert!(repo.find_by_id(participant.id).await?.is_none());

    Ok(())
}
