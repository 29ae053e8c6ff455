use customers_api::db::{ConnectionOptions, establish_connection_pool_with, get_connection};
use diesel::RunQueryDsl;
use diesel::sql_types::Text;

mod common;

#[derive(diesel::QueryableByName)]
struct JournalMode {
    #[diesel(sql_type = Text)]
    journal_mode: String,
}

#[test]
fn test_creates_and_removes_db_files() {
    let path = {
        let test_db = common::TestDb::new("test_creates_db.db");
        assert!(get_connection(&test_db.pool()).is_ok());
        assert!(test_db.path().exists());
        test_db.path().clone()
    };
    assert!(!path.exists());
}

#[test]
fn test_default_options_enable_wal() {
    let test_db = common::TestDb::new("test_wal.db");
    let mut conn = get_connection(&test_db.pool()).unwrap();

    let mode = diesel::sql_query("PRAGMA journal_mode")
        .get_result::<JournalMode>(&mut conn)
        .unwrap();

    assert_eq!(mode.journal_mode.to_lowercase(), "wal");
}

#[test]
fn test_custom_options_are_applied() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("plain.db");
    let options = ConnectionOptions {
        enable_wal: false,
        busy_timeout: None,
    };

    let pool = establish_connection_pool_with(path.to_str().unwrap(), options).unwrap();
    let mut conn = get_connection(&pool).unwrap();

    let mode = diesel::sql_query("PRAGMA journal_mode")
        .get_result::<JournalMode>(&mut conn)
        .unwrap();

    assert_eq!(mode.journal_mode.to_lowercase(), "delete");
}
