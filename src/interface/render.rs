use std::io::Write;

use crate::error::Result;
use crate::models::{BiometricInput, FoodCatalog, FoodItem, MealPlanResult, MealSlot};
use crate::planner::calculations::weekly_change_kg;

/// Display a meal plan as a formatted table.
pub fn display_meal_plan(plan: &MealPlanResult, input: &BiometricInput) {
    println!();
    println!("=== Your Diet Plan ===");
    println!();
    println!(
        "BMI: {:.1} ({})  |  BMR: {:.0} cal  |  Target: {:.0} cal  |  Budget: {:.0}",
        plan.bmi,
        plan.bmi_category.description(),
        plan.bmr,
        plan.target_calories,
        input.daily_budget
    );
    println!("{}", plan.bmi_category.advice());

    let weekly = weekly_change_kg(input.goal);
    if weekly != 0.0 {
        let verb = if weekly < 0.0 { "loss" } else { "gain" };
        println!(
            "Goal: {} (~{:.1} kg {} per week, ~{:.0} kg per month)",
            input.goal.description(),
            weekly.abs(),
            verb,
            weekly.abs() * 4.0
        );
    } else {
        println!("Goal: {}", input.goal.description());
    }
    println!();

    let max_name_len = plan
        .slots
        .iter()
        .map(|p| p.item.name.len())
        .max()
        .unwrap_or(10);

    for pick in &plan.slots {
        let over = pick.budget_overflow();
        let tag = if over > 0.0 {
            format!("  [over budget by {:.0}]", over)
        } else {
            String::new()
        };

        println!(
            "{:<9} {:<width$} {:>7} | {:>4.0} cal (target {:>4.0}) | {:>6.0} (max {:>5.0}){}",
            pick.slot.name(),
            pick.item.name,
            pick.item.diet_type.label(),
            pick.item.calories,
            pick.target.calories,
            pick.item.price,
            pick.target.budget,
            tag,
            width = max_name_len
        );
        if !pick.item.quantity_label.is_empty() {
            println!("{:<9} {}", "", pick.item.quantity_label);
        }
    }

    let totals = &plan.totals;
    println!();
    println!("--- Totals ---");
    println!(
        "Calories: {:.0} ({:+.0} vs target)",
        totals.calories,
        plan.calorie_gap()
    );
    println!(
        "Protein: {:.1} g | Carbs: {:.1} g | Fats: {:.1} g | Fiber: {:.1} g",
        totals.protein, totals.carbs, totals.fats, totals.fiber
    );
    println!("Cost: {:.2} of {:.2}", totals.cost, input.daily_budget);
    println!();
}

/// Write a meal plan as pretty-printed JSON.
pub fn write_plan_json<W: Write>(plan: &MealPlanResult, mut writer: W) -> Result<()> {
    serde_json::to_writer_pretty(&mut writer, plan)?;
    writeln!(writer)?;
    Ok(())
}

/// Write a meal plan as CSV: one row per slot plus a totals row.
pub fn write_plan_csv<W: Write>(plan: &MealPlanResult, writer: W) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);

    wtr.write_record([
        "slot",
        "name",
        "quantity",
        "type",
        "calories",
        "protein",
        "carbs",
        "fats",
        "fiber",
        "price",
        "target_calories",
        "max_budget",
    ])?;

    for pick in &plan.slots {
        let item = &pick.item;
        wtr.write_record([
            pick.slot.name().to_string(),
            item.name.clone(),
            item.quantity_label.clone(),
            item.diet_type.label().to_string(),
            item.calories.to_string(),
            item.protein_g.to_string(),
            item.carbs_g.to_string(),
            item.fats_g.to_string(),
            item.fiber_g.to_string(),
            item.price.to_string(),
            format!("{:.0}", pick.target.calories),
            format!("{:.2}", pick.target.budget),
        ])?;
    }

    let totals = &plan.totals;
    wtr.write_record([
        "total".to_string(),
        String::new(),
        String::new(),
        String::new(),
        totals.calories.to_string(),
        totals.protein.to_string(),
        totals.carbs.to_string(),
        totals.fats.to_string(),
        totals.fiber.to_string(),
        totals.cost.to_string(),
        plan.target_calories.to_string(),
        String::new(),
    ])?;

    wtr.flush()?;
    Ok(())
}

/// Display catalog items grouped by slot.
pub fn display_catalog(catalog: &FoodCatalog, only: Option<MealSlot>) {
    let slots: Vec<MealSlot> = match only {
        Some(slot) => vec![slot],
        None => MealSlot::ALL.to_vec(),
    };

    for slot in slots {
        let items = catalog.items(slot);
        if items.is_empty() {
            println!("{}: (none)", slot);
            continue;
        }

        println!();
        println!("=== {} ({} items) ===", slot, items.len());
        println!();

        for item in items {
            println!(
                "  {} [{}] - {} cal, P:{} C:{} F:{} Fi:{}, price:{}",
                item.name,
                item.diet_type.label(),
                item.calories,
                item.protein_g,
                item.carbs_g,
                item.fats_g,
                item.fiber_g,
                item.price
            );
        }
    }

    println!();
}

/// Display one item with its recipe.
pub fn display_recipe(slot: MealSlot, item: &FoodItem) {
    println!();
    println!("=== {} ({}, {}) ===", item.name, slot, item.diet_type.label());
    if !item.quantity_label.is_empty() {
        println!("Serving: {}", item.quantity_label);
    }
    println!(
        "{} cal | Protein {} g | Carbs {} g | Fats {} g | Fiber {} g | Price {}",
        item.calories, item.protein_g, item.carbs_g, item.fats_g, item.fiber_g, item.price
    );
    println!();
    if item.recipe_text.is_empty() {
        println!("No recipe available.");
    } else {
        println!("{}", item.recipe_text);
    }
    println!();
}
