//! エラー分類・終了コードのテスト

use erp_order_processor::error::{ErrorKind, OrderError};

#[test]
fn test_exit_codes_are_distinct() {
    let mut codes: Vec<i32> = [ErrorKind::Config, ErrorKind::Persistence, ErrorKind::Input, ErrorKind::Output]
        .iter()
        .map(ErrorKind::exit_code)
        .collect();
    codes.sort();
    codes.dedup();
    assert_eq!(codes.len(), 4);
    assert!(!codes.contains(&0));
}

#[test]
fn test_error_kinds() {
    let cases = vec![
        (OrderError::Config("x".into()), ErrorKind::Config),
        (OrderError::MasterSave("x".into()), ErrorKind::Persistence),
        (OrderError::MasterLoad("x".into()), ErrorKind::Persistence),
        (OrderError::FileNotFound("x".into()), ErrorKind::Input),
        (
            OrderError::UnsupportedFormat { path: "a.csv".into(), allowed: "xlsx".into() },
            ErrorKind::Input,
        ),
        (OrderError::SpreadsheetRead("x".into()), ErrorKind::Input),
        (
            OrderError::Common(erp_order_common::Error::MissingColumn {
                table: "uploaded",
                column: "SKU".into(),
            }),
            ErrorKind::Input,
        ),
        (OrderError::Common(erp_order_common::Error::Excel("x".into())), ErrorKind::Output),
        (OrderError::OutputDir("x".into()), ErrorKind::Output),
        (OrderError::OutputWrite("x".into()), ErrorKind::Output),
    ];

    for (err, kind) in cases {
        assert_eq!(err.kind(), kind, "{:?}", err);
    }
}

#[test]
fn test_error_display() {
    let err = OrderError::UnsupportedFormat { path: "orders.csv".into(), allowed: "xlsx, xls".into() };
    let display = format!("{}", err);
    assert!(display.contains("orders.csv"));
    assert!(display.contains("xlsx, xls"));

    let err = OrderError::Common(erp_order_common::Error::MissingColumn {
        table: "uploaded",
        column: "SKU".into(),
    });
    assert!(format!("{}", err).contains("'SKU'"));
}
