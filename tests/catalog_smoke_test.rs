use std::io::Write;

use tempfile::{NamedTempFile, TempDir};

use meal_plan_optimizer_rs::error::MealError;
use meal_plan_optimizer_rs::models::{FoodItem, NutrientConstraints};
use meal_plan_optimizer_rs::optimizer::optimize;
use meal_plan_optimizer_rs::state::{
    default_catalog, import_csv, load_constraints, load_foods, save_foods, FoodCatalog,
};

#[test]
fn test_starter_catalog_roundtrip_preserves_order() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("foods.json");

    save_foods(&path, &default_catalog()).unwrap();
    let loaded = load_foods(&path).unwrap();

    let names: Vec<&str> = loaded.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, vec!["Rice", "Lentils", "Milk", "Eggs", "Vegetables"]);
}

#[test]
fn test_optimize_from_saved_catalog() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("foods.json");
    save_foods(&path, &default_catalog()).unwrap();

    let catalog = FoodCatalog::new(load_foods(&path).unwrap());
    let foods = catalog.require_valid_foods().unwrap();
    let result = optimize(&foods, &NutrientConstraints::default());

    assert!(!result.meal_plan.is_empty());
    assert!(result.total_cost > 0.0);
    for item in &result.meal_plan {
        assert!(item.servings <= item.food.cap() + 0.01);
    }
}

#[test]
fn test_incomplete_rows_never_reach_optimizer() {
    let mut catalog = FoodCatalog::new(Vec::new());
    catalog.add_food(FoodItem::new("", "", 0.0, 0.0, 0.0, 0.0, 0.0, Some(5.0)));
    catalog.add_food(FoodItem::new("", "Unpriced", 0.0, 200.0, 5.0, 5.0, 5.0, None));

    assert!(matches!(
        catalog.require_valid_foods(),
        Err(MealError::NoValidFoods)
    ));

    let id = catalog.add_food(FoodItem::new("", "Oats", 18.0, 389.0, 16.9, 6.9, 66.3, Some(2.0)));
    let valid = catalog.require_valid_foods().unwrap();
    assert_eq!(valid.len(), 1);
    assert_eq!(valid[0].id, id);
}

#[test]
fn test_import_csv_then_optimize() {
    let csv = "name,cost,calories,protein,fat,carbs,maxServings\n\
               Oats,18,389,16.9,6.9,66.3,2\n\
               Chickpeas,22,364,19,6,61,3\n\
               Olive Oil,9,884,0,100,0,\n";
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(csv.as_bytes()).unwrap();

    let mut catalog = FoodCatalog::with_defaults();
    for food in import_csv(file.path()).unwrap() {
        catalog.add_food(food);
    }
    assert_eq!(catalog.len(), 8);

    let mut ids: Vec<&str> = catalog.all_foods().iter().map(|f| f.id.as_str()).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), 8, "imported foods must get unique ids");

    let result = optimize(&catalog.require_valid_foods().unwrap(), &NutrientConstraints::default());
    assert!(!result.meal_plan.is_empty());
}

#[test]
fn test_constraints_file_drives_optimizer() {
    let json = r#"{
        "minCalories": 2000, "maxCalories": 2500,
        "minProtein": 0, "maxProtein": 1000,
        "minFat": 0, "maxFat": 1000,
        "minCarbs": 0, "maxCarbs": 1000
    }"#;
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(json.as_bytes()).unwrap();

    let constraints = load_constraints(file.path()).unwrap();
    let foods: Vec<FoodItem> = default_catalog()
        .into_iter()
        .filter(|f| f.name == "Rice" || f.name == "Eggs")
        .collect();

    let result = optimize(&foods, &constraints);
    assert_eq!(result.total_cost, 120.0);
    assert_eq!(result.nutrients.calories, 1010.0);
}

#[test]
fn test_load_missing_file_is_io_error() {
    let dir = TempDir::new().unwrap();
    let err = load_foods(dir.path().join("nope.json")).unwrap_err();
    assert!(matches!(err, MealError::Io(_)));
}
