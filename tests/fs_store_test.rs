use rust_decimal::Decimal;
use std::fs;
use tempfile::TempDir;
use trove::api::{AssumeNo, AssumeYes, TroveApi};
use trove::index::ItemIndex;
use trove::model::{Collection, Item};
use trove::registry::Registry;
use trove::store::fs::FileStore;
use trove::store::CollectionStore;

fn setup() -> (TempDir, FileStore) {
    let dir = TempDir::new().unwrap();
    let store = FileStore::new(dir.path().to_path_buf());
    (dir, store)
}

fn sample_items() -> Vec<Item> {
    vec![
        Item {
            price: Decimal::new(1250, 2),
            status: Some("used".into()),
            satisfaction: 8,
            comment: Some("small scratch".into()),
            ..Item::named("Widget")
        },
        Item {
            price: Decimal::new(3, 0),
            status: None,
            satisfaction: 0,
            comment: None,
            sold: true,
            ..Item::named("Gadget")
        },
        Item::named("Doohickey"),
    ]
}

#[test]
fn test_round_trip_keeps_fields() {
    let (_dir, mut store) = setup();
    store
        .save(&Collection::with_items("Coins", sample_items()))
        .unwrap();

    let loaded = store.load_all().unwrap();

    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded[0].name, "Coins");
    assert_eq!(loaded[0].items, sample_items());
}

#[test]
fn test_saving_twice_is_byte_identical() {
    let (dir, mut store) = setup();
    store
        .save(&Collection::with_items("Coins", sample_items()))
        .unwrap();
    let path = dir.path().join("Coins").join("items.txt");
    let first = fs::read(&path).unwrap();

    let reloaded = store.load_all().unwrap().remove(0);
    store.save(&reloaded).unwrap();

    assert_eq!(fs::read(&path).unwrap(), first);
}

#[test]
fn test_name_is_sanitized_on_disk() {
    let (dir, mut store) = setup();
    store.save(&Collection::new("My Coins!")).unwrap();

    assert!(dir.path().join("My_Coins_").join("items.txt").is_file());
    assert_eq!(store.load_all().unwrap()[0].name, "My_Coins_");
}

#[test]
fn test_older_line_formats_load() {
    let (dir, store) = setup();
    let coll_dir = dir.path().join("Stamps");
    fs::create_dir_all(&coll_dir).unwrap();
    fs::write(
        coll_dir.join("items.txt"),
        "Penny Black || 100 || used || 9 || rare || true\n\
         Inverted Jenny || 5 || new || 7 || lucky\n\
         Blue Mauritius\n\
         Broken || 1 || used\n",
    )
    .unwrap();

    let stamps = store.load_all().unwrap().remove(0);

    let names: Vec<_> = stamps.items.iter().map(|i| i.name.as_str()).collect();
    assert_eq!(names, vec!["Penny Black", "Inverted Jenny", "Blue Mauritius"]);
    assert!(stamps.items[0].sold);
    assert!(!stamps.items[1].sold);
    assert_eq!(stamps.items[2], Item::named("Blue Mauritius"));
}

#[test]
fn test_sold_items_move_last_on_reload() {
    let (dir, mut store) = setup();
    store
        .save(&Collection::with_items(
            "Coins",
            vec![Item::named("A"), Item::named("B")],
        ))
        .unwrap();

    let mut api = TroveApi::new(store, dir.path());
    api.mark_sold("Coins", ItemIndex(1)).unwrap();

    let reloaded = Registry::new(FileStore::new(dir.path().to_path_buf()).load_all().unwrap());
    let names: Vec<_> = reloaded
        .get("Coins")
        .unwrap()
        .items
        .iter()
        .map(|i| i.name.as_str())
        .collect();
    assert_eq!(names, vec!["B", "A"]);
}

#[test]
fn test_duplicate_collection_name_is_rejected() {
    let (dir, store) = setup();
    let mut api = TroveApi::new(store, dir.path());
    api.create_collection("Coins").unwrap();

    assert!(api.create_collection("COINS").is_err());
    assert_eq!(api.collections().len(), 1);
}

#[test]
fn test_export_then_import_reproduces_items() {
    let (dir, store) = setup();
    let export_path = dir.path().join("coins-export.txt");
    let mut api = TroveApi::new(store, dir.path().join("data"));
    api.create_collection("Coins").unwrap();
    for name in ["Penny", "Dime"] {
        let mut draft = api.new_draft();
        draft.set_name(name).unwrap();
        api.create_item("Coins", &draft, &mut AssumeNo).unwrap();
    }
    let before = api.collection("Coins").unwrap().items.clone();

    let exported = api
        .export_collection("Coins", Some(export_path.clone()))
        .unwrap();
    assert!(exported.succeeded());

    let imported = api
        .import_collection(&export_path, "Coins", &mut AssumeYes)
        .unwrap();
    assert!(imported.succeeded());
    assert_eq!(api.collection("Coins").unwrap().items, before);

    assert_eq!(api.reload().unwrap(), 1);
    assert_eq!(api.collection("Coins").unwrap().items, before);
}

#[test]
fn test_path_of_collection_is_items_file() {
    let (dir, store) = setup();
    let mut api = TroveApi::new(store, dir.path());
    api.create_collection("My Coins").unwrap();

    let result = api.paths(Some("my_coins")).unwrap();

    let expected = dir.path().join("My_Coins").join("items.txt");
    assert_eq!(result.paths, vec![expected.clone()]);
    assert!(expected.is_file());
}

#[test]
fn test_pipes_in_text_survive_reload() {
    let (dir, store) = setup();
    let mut api = TroveApi::new(store, dir.path());
    api.create_collection("Coins").unwrap();

    let mut draft = api.new_draft();
    draft.set_name("Penny").unwrap();
    assert!(draft.set_comment("mint||boxed").is_err());
    assert!(draft.set_comment("chipped|").is_err());
    draft.set_comment("mint | boxed").unwrap();
    api.create_item("Coins", &draft, &mut AssumeNo).unwrap();

    let mut draft = api.new_draft();
    draft.set_name("Dime").unwrap();
    assert!(draft.set_status("|used").is_err());
    api.create_item("Coins", &draft, &mut AssumeNo).unwrap();

    api.reload().unwrap();
    let coins = api.collection("Coins").unwrap();
    assert_eq!(coins.items.len(), 2);
    assert_eq!(coins.items[0].comment.as_deref(), Some("mint | boxed"));
    assert_eq!(coins.items[1].status.as_deref(), Some("new"));
}

#[test]
fn test_import_replaces_every_clashing_collection() {
    let (dir, store) = setup();
    for name in ["Coins", "coins"] {
        fs::create_dir_all(dir.path().join(name)).unwrap();
        fs::write(dir.path().join(name).join("items.txt"), "Penny\n").unwrap();
    }
    let source = dir.path().join("import.txt");
    fs::write(&source, "Nickel\nDime\n").unwrap();
    let mut api = TroveApi::new(store, dir.path());
    assert_eq!(api.collections().len(), 2);

    let result = api
        .import_collection(&source, "COINS", &mut AssumeYes)
        .unwrap();

    assert!(result.succeeded());
    assert_eq!(api.collections().len(), 1);
    assert_eq!(api.reload().unwrap(), 1);
    let coins = api.collection("coins").unwrap();
    assert_eq!(coins.name, "COINS");
    assert_eq!(coins.items, vec![Item::named("Nickel"), Item::named("Dime")]);
}

#[test]
fn test_declined_import_keeps_every_clashing_collection() {
    let (dir, store) = setup();
    for name in ["Coins", "coins"] {
        fs::create_dir_all(dir.path().join(name)).unwrap();
        fs::write(dir.path().join(name).join("items.txt"), "Penny\n").unwrap();
    }
    let source = dir.path().join("import.txt");
    fs::write(&source, "Nickel\n").unwrap();
    let mut api = TroveApi::new(store, dir.path());

    api.import_collection(&source, "COINS", &mut AssumeNo)
        .unwrap();

    assert_eq!(api.reload().unwrap(), 2);
    assert!(dir.path().join("Coins").join("items.txt").is_file());
    assert!(dir.path().join("coins").join("items.txt").is_file());
}
