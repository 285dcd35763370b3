use sql_util::{
    clear_all_results, from_csv, from_json, get_db_credentials_from, to_csv, to_json, Backend,
    ConnectionFactory, Record, Value,
};
use tempfile::TempDir;

fn orders() -> Vec<Record> {
    vec![
        Record::new()
            .with("order_id", 1001)
            .with("customer", "Acme, Inc.")
            .with("total", 249.99)
            .with("coupon", Value::Null),
        Record::new()
            .with("order_id", 1002)
            .with("customer", "Globex")
            .with("total", 15.0)
            .with("coupon", "SPRING"),
    ]
}

#[test]
fn test_export_both_formats_then_clear() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("results");
    let rows = orders();

    to_csv(&out, "orders", &rows).unwrap();
    to_json(&out, "orders", &rows).unwrap();
    std::fs::write(out.join("notes.txt"), "keep me").unwrap();

    let from_disk_json = from_json(&out, "orders.json").unwrap();
    assert_eq!(from_disk_json, rows);

    let from_disk_csv = from_csv(&out, "orders.csv").unwrap();
    assert_eq!(from_disk_csv.len(), rows.len());
    for (read, written) in from_disk_csv.iter().zip(&rows) {
        let read_keys: Vec<&str> = read.keys().collect();
        let written_keys: Vec<&str> = written.keys().collect();
        assert_eq!(read_keys, written_keys);
        assert!(read.values().all(|v| matches!(v, Value::Text(_))));
    }
    assert_eq!(from_disk_csv[0].get("order_id"), Some(&Value::from("1001")));
    assert_eq!(from_disk_csv[0].get("customer"), Some(&Value::from("Acme, Inc.")));

    assert_eq!(clear_all_results(&out).unwrap(), 2);
    assert!(out.join("notes.txt").exists());
}

#[test]
fn test_empty_result_set_exports() {
    let dir = TempDir::new().unwrap();

    assert!(to_csv(dir.path(), "none", &[]).unwrap().is_none());
    assert!(!dir.path().join("none.csv").exists());

    let json = to_json(dir.path(), "none", &[]).unwrap();
    assert_eq!(std::fs::read_to_string(json).unwrap(), "[]");
}

#[test]
fn test_connection_from_credentials_file_requires_connect() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("db_credentials.json");
    std::fs::write(
        &path,
        r#"{"prod": {"host": "127.0.0.1", "user": "report", "password": "pw", "database": "shop", "port": 3306}}"#,
    )
    .unwrap();

    let creds = get_db_credentials_from(&path, "prod").unwrap();
    assert!(get_db_credentials_from(&path, "dev").is_err());

    let mut conn = ConnectionFactory::create(Backend::SingleStore, creds);
    assert!(!conn.is_connected());
    assert!(conn.execute_and_fetchall("SELECT 1", &[]).is_err());
    assert!(conn.close().is_err());
}
