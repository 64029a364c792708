use barcode_basket::{load_price_list, parse_price_list, PriceCatalog, ScanError};

const SAMPLE_EXPORT: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<Root>
  <ChainId>7290700100008</ChainId>
  <SubChainId>1</SubChainId>
  <StoreId>001</StoreId>
  <Items Count="3">
    <Item>
      <PriceUpdateDate>2021-05-14 08:00</PriceUpdateDate>
      <ItemCode>7290004127336</ItemCode>
      <ItemName>Milk 3%</ItemName>
      <ItemPrice>6.90</ItemPrice>
    </Item>
    <Item>
      <PriceUpdateDate>2021-05-14 08:00</PriceUpdateDate>
      <ItemCode>7290000144474</ItemCode>
      <ItemName>Sliced Bread</ItemName>
      <ItemPrice>8.50</ItemPrice>
    </Item>
    <Item>
      <PriceUpdateDate>2021-05-14 08:00</PriceUpdateDate>
      <ItemCode>7290000311203</ItemCode>
      <ItemName>Cottage Cheese</ItemName>
      <ItemPrice>5.90</ItemPrice>
    </Item>
  </Items>
</Root>"#;

#[test]
fn test_export_parses_into_catalog() {
    let records = parse_price_list(SAMPLE_EXPORT).unwrap();
    assert_eq!(records.len(), 3);

    let catalog = PriceCatalog::from_records(records);
    assert_eq!(catalog.lookup(7290004127336).unwrap(), "Milk 3%");
    assert_eq!(catalog.lookup(7290000144474).unwrap(), "Sliced Bread");
    assert!(matches!(
        catalog.lookup(1),
        Err(ScanError::ProductNotFoundError { barcode: 1 })
    ));
}

#[test]
fn test_load_price_list_from_disk() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    let path = temp_dir.path().join("prices.xml");
    std::fs::write(&path, SAMPLE_EXPORT).unwrap();

    let records = load_price_list(&path).unwrap();
    assert_eq!(records.len(), 3);
    assert_eq!(records[2].item_name, "Cottage Cheese");
}

#[test]
fn test_missing_price_list_file_is_an_io_error() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    let result = load_price_list(temp_dir.path().join("nope.xml"));
    assert!(matches!(result, Err(ScanError::IoError(_))));
}

#[test]
fn test_truncated_export_is_a_catalog_parse_error() {
    let result = parse_price_list("<Root><Items><Item><ItemCode>123</ItemCode>");
    match result {
        Err(ScanError::CatalogParseError { .. }) => {}
        other => panic!("expected CatalogParseError, got {other:?}"),
    }
}

#[test]
fn test_parse_error_is_not_recoverable() {
    let error = parse_price_list("not xml at all <<<").unwrap_err();
    assert!(!error.is_recoverable());
}
