use roster_core::db::open_db_in_memory;
use roster_core::{
    ClassroomRepository, ClassroomService, ConflictKind, EnrollmentRepository, MissingEntity,
    NewClassroom, NewStudent, RepoError, SqliteClassroomRepository, SqliteEnrollmentRepository,
    SqliteStudentRepository, StudentRepository, ValidationError,
};
use rusqlite::Connection;

fn new_classroom(name: &str) -> NewClassroom {
    NewClassroom {
        name: name.to_string(),
    }
}

fn new_student(name: &str) -> NewStudent {
    NewStudent {
        name: name.to_string(),
        email: format!("{}@example.com", name.to_lowercase()),
        address: None,
        phone_number: None,
        birthdate: None,
        grade: None,
    }
}

fn service(conn: &Connection) -> ClassroomService<SqliteClassroomRepository<'_>, SqliteEnrollmentRepository<'_>> {
    ClassroomService::new(
        SqliteClassroomRepository::new(conn),
        SqliteEnrollmentRepository::new(conn),
    )
}

fn classroom_count(conn: &Connection, name: &str) -> i64 {
    conn.query_row(
        "SELECT COUNT(*) FROM classrooms WHERE name = ?1;",
        [name],
        |row| row.get(0),
    )
    .unwrap()
}

#[test]
fn create_and_list_roundtrip() {
    let conn = open_db_in_memory().unwrap();

    let created = service(&conn).create(&new_classroom("Math101")).unwrap();
    assert!(created.id > 0);
    assert_eq!(created.name, "Math101");

    let all = service(&conn).list_all().unwrap();
    assert_eq!(all, vec![created]);
}

#[test]
fn create_rejects_empty_name() {
    let conn = open_db_in_memory().unwrap();

    let err = service(&conn).create(&new_classroom("")).unwrap_err();
    assert!(matches!(
        err,
        RepoError::Validation(ValidationError::EmptyClassroomName)
    ));
    assert!(service(&conn).list_all().unwrap().is_empty());
}

#[test]
fn duplicate_name_is_a_conflict_and_count_stays_one() {
    let conn = open_db_in_memory().unwrap();

    service(&conn).create(&new_classroom("Math101")).unwrap();
    let err = service(&conn).create(&new_classroom("Math101")).unwrap_err();
    assert!(matches!(
        err,
        RepoError::Conflict(ConflictKind::DuplicateClassroomName(_))
    ));
    assert_eq!(classroom_count(&conn, "Math101"), 1);
}

#[test]
fn name_match_is_case_sensitive() {
    let conn = open_db_in_memory().unwrap();

    service(&conn).create(&new_classroom("Math101")).unwrap();
    service(&conn).create(&new_classroom("math101")).unwrap();
    assert_eq!(service(&conn).list_all().unwrap().len(), 2);
}

#[test]
fn unique_constraint_backs_the_pre_check() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteClassroomRepository::new(&conn);

    // Bypass the service pre-check; the constraint must still reject it.
    repo.create(&new_classroom("Math101")).unwrap();
    let err = repo.create(&new_classroom("Math101")).unwrap_err();
    assert!(matches!(
        err,
        RepoError::Conflict(ConflictKind::DuplicateClassroomName(_))
    ));
}

#[test]
fn delete_reports_not_found_for_absent_id() {
    let conn = open_db_in_memory().unwrap();

    let err = service(&conn).delete_by_id(7).unwrap_err();
    assert!(matches!(
        err,
        RepoError::NotFound(MissingEntity::Classroom(7))
    ));
}

#[test]
fn delete_cascades_own_enrollments_and_keeps_students() {
    let conn = open_db_in_memory().unwrap();
    let students = SqliteStudentRepository::new(&conn);
    let classrooms = SqliteClassroomRepository::new(&conn);
    let enrollments = SqliteEnrollmentRepository::new(&conn);

    let ana = students.create(&new_student("Ana")).unwrap();
    let math = classrooms.create(&new_classroom("Math101")).unwrap();
    let bio = classrooms.create(&new_classroom("Bio202")).unwrap();
    enrollments.create(ana.id, math.id).unwrap();
    let unrelated = enrollments.create(ana.id, bio.id).unwrap();

    service(&conn).delete_by_id(math.id).unwrap();

    // Associations of the deleted classroom are gone, unrelated ones stay.
    assert!(enrollments.list_by_classroom(math.id).unwrap().is_empty());
    assert_eq!(
        enrollments.list_by_classroom(bio.id).unwrap(),
        vec![unrelated]
    );
    // The student itself was never deleted.
    assert!(students.find_by_id(ana.id).unwrap().is_some());
}

#[test]
fn list_students_distinguishes_empty_from_missing() {
    let conn = open_db_in_memory().unwrap();
    let students = SqliteStudentRepository::new(&conn);
    let enrollments = SqliteEnrollmentRepository::new(&conn);

    let math = service(&conn).create(&new_classroom("Math101")).unwrap();

    // Existing classroom without enrollments: empty list, not an error.
    assert!(service(&conn).list_students(math.id).unwrap().is_empty());

    let ana = students.create(&new_student("Ana")).unwrap();
    let ben = students.create(&new_student("Ben")).unwrap();
    enrollments.create(ana.id, math.id).unwrap();
    enrollments.create(ben.id, math.id).unwrap();

    let listed = service(&conn).list_students(math.id).unwrap();
    assert_eq!(
        listed.iter().map(|s| s.id).collect::<Vec<_>>(),
        vec![ana.id, ben.id]
    );

    // Unknown classroom id: not-found, not an empty list.
    let err = service(&conn).list_students(999).unwrap_err();
    assert!(matches!(
        err,
        RepoError::NotFound(MissingEntity::Classroom(999))
    ));
}
