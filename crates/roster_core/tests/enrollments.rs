use roster_core::db::open_db_in_memory;
use roster_core::{
    ClassroomRepository, ConflictKind, EnrollmentRepository, EnrollmentService, MissingEntity,
    NewClassroom, NewStudent, RepoError, SqliteClassroomRepository, SqliteEnrollmentRepository,
    SqliteStudentRepository, StudentRepository,
};
use rusqlite::{params, Connection};

fn service(
    conn: &Connection,
) -> EnrollmentService<
    SqliteEnrollmentRepository<'_>,
    SqliteStudentRepository<'_>,
    SqliteClassroomRepository<'_>,
> {
    EnrollmentService::new(
        SqliteEnrollmentRepository::new(conn),
        SqliteStudentRepository::new(conn),
        SqliteClassroomRepository::new(conn),
    )
}

fn seed_student(conn: &Connection, name: &str) -> i64 {
    SqliteStudentRepository::new(conn)
        .create(&NewStudent {
            name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase()),
            address: None,
            phone_number: None,
            birthdate: None,
            grade: None,
        })
        .unwrap()
        .id
}

fn seed_classroom(conn: &Connection, name: &str) -> i64 {
    SqliteClassroomRepository::new(conn)
        .create(&NewClassroom {
            name: name.to_string(),
        })
        .unwrap()
        .id
}

fn pair_count(conn: &Connection, student_id: i64, classroom_id: i64) -> i64 {
    conn.query_row(
        "SELECT COUNT(*) FROM enrollments WHERE student_id = ?1 AND classroom_id = ?2;",
        params![student_id, classroom_id],
        |row| row.get(0),
    )
    .unwrap()
}

#[test]
fn add_binds_both_sides_and_assigns_an_id() {
    let conn = open_db_in_memory().unwrap();
    let student_id = seed_student(&conn, "Ana");
    let classroom_id = seed_classroom(&conn, "Math101");

    let enrollment = service(&conn).add(student_id, classroom_id).unwrap();
    assert!(enrollment.id > 0);
    assert_eq!(enrollment.student_id, student_id);
    assert_eq!(enrollment.classroom_id, classroom_id);
    assert_eq!(pair_count(&conn, student_id, classroom_id), 1);
}

#[test]
fn duplicate_add_is_rejected_and_count_stays_one() {
    let conn = open_db_in_memory().unwrap();
    let student_id = seed_student(&conn, "Ana");
    let classroom_id = seed_classroom(&conn, "Math101");

    service(&conn).add(student_id, classroom_id).unwrap();
    let err = service(&conn).add(student_id, classroom_id).unwrap_err();
    assert!(matches!(
        err,
        RepoError::Conflict(ConflictKind::AlreadyEnrolled { .. })
    ));
    assert_eq!(pair_count(&conn, student_id, classroom_id), 1);
}

#[test]
fn duplicate_check_short_circuits_before_entity_lookups() {
    let conn = open_db_in_memory().unwrap();
    let student_id = seed_student(&conn, "Ana");
    let classroom_id = seed_classroom(&conn, "Math101");
    service(&conn).add(student_id, classroom_id).unwrap();

    // Delete the parents out from under the pair; the stale row keeps the
    // pair "existing", so the duplicate check must fire before any lookup.
    conn.execute_batch("PRAGMA foreign_keys = OFF;").unwrap();
    conn.execute("DELETE FROM students WHERE id = ?1;", [student_id])
        .unwrap();
    conn.execute_batch("PRAGMA foreign_keys = ON;").unwrap();

    let err = service(&conn).add(student_id, classroom_id).unwrap_err();
    assert!(matches!(
        err,
        RepoError::Conflict(ConflictKind::AlreadyEnrolled { .. })
    ));
}

#[test]
fn add_names_the_missing_student_then_classroom() {
    let conn = open_db_in_memory().unwrap();
    let student_id = seed_student(&conn, "Ana");
    let classroom_id = seed_classroom(&conn, "Math101");

    let err = service(&conn).add(404, classroom_id).unwrap_err();
    assert!(matches!(
        err,
        RepoError::NotFound(MissingEntity::Student(404))
    ));

    let err = service(&conn).add(student_id, 505).unwrap_err();
    assert!(matches!(
        err,
        RepoError::NotFound(MissingEntity::Classroom(505))
    ));

    assert_eq!(pair_count(&conn, student_id, classroom_id), 0);
}

#[test]
fn remove_then_add_yields_a_fresh_identity() {
    let conn = open_db_in_memory().unwrap();
    let student_id = seed_student(&conn, "Ana");
    let classroom_id = seed_classroom(&conn, "Math101");

    let original = service(&conn).add(student_id, classroom_id).unwrap();
    service(&conn).remove(student_id, classroom_id).unwrap();
    assert_eq!(pair_count(&conn, student_id, classroom_id), 0);

    let recreated = service(&conn).add(student_id, classroom_id).unwrap();
    assert_ne!(recreated.id, original.id);
}

#[test]
fn remove_absent_pair_is_not_found() {
    let conn = open_db_in_memory().unwrap();
    let student_id = seed_student(&conn, "Ana");
    let classroom_id = seed_classroom(&conn, "Math101");

    let err = service(&conn).remove(student_id, classroom_id).unwrap_err();
    assert!(matches!(
        err,
        RepoError::NotFound(MissingEntity::Enrollment { .. })
    ));
}

#[test]
fn list_by_classroom_returns_empty_for_no_rows() {
    let conn = open_db_in_memory().unwrap();
    let classroom_id = seed_classroom(&conn, "Math101");

    assert!(service(&conn)
        .list_by_classroom(classroom_id)
        .unwrap()
        .is_empty());
    // Even an unknown classroom id yields an empty list here, not an error.
    assert!(service(&conn).list_by_classroom(999).unwrap().is_empty());
}

#[test]
fn unique_constraint_rejects_a_raced_duplicate_insert() {
    let conn = open_db_in_memory().unwrap();
    let student_id = seed_student(&conn, "Ana");
    let classroom_id = seed_classroom(&conn, "Math101");
    let repo = SqliteEnrollmentRepository::new(&conn);

    // Simulate losing the race: the row appears between the service
    // pre-check and the insert.
    conn.execute(
        "INSERT INTO enrollments (student_id, classroom_id) VALUES (?1, ?2);",
        params![student_id, classroom_id],
    )
    .unwrap();

    let err = repo.create(student_id, classroom_id).unwrap_err();
    assert!(matches!(
        err,
        RepoError::Conflict(ConflictKind::AlreadyEnrolled { .. })
    ));
    assert_eq!(pair_count(&conn, student_id, classroom_id), 1);
}

#[test]
fn full_enrollment_scenario() {
    let conn = open_db_in_memory().unwrap();
    let classrooms = SqliteClassroomRepository::new(&conn);

    // Create classroom "Math101"; creating it again must conflict.
    let math = classrooms
        .create(&NewClassroom {
            name: "Math101".to_string(),
        })
        .unwrap();
    assert!(classrooms
        .create(&NewClassroom {
            name: "Math101".to_string(),
        })
        .is_err());

    let student_id = seed_student(&conn, "Ana");

    // Enroll, duplicate-enroll, remove, remove again.
    service(&conn).add(student_id, math.id).unwrap();
    assert!(matches!(
        service(&conn).add(student_id, math.id).unwrap_err(),
        RepoError::Conflict(ConflictKind::AlreadyEnrolled { .. })
    ));
    service(&conn).remove(student_id, math.id).unwrap();
    assert_eq!(pair_count(&conn, student_id, math.id), 0);
    assert!(matches!(
        service(&conn).remove(student_id, math.id).unwrap_err(),
        RepoError::NotFound(MissingEntity::Enrollment { .. })
    ));
}
