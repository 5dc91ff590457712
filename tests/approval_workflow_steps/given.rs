//! Given steps for approval workflow BDD scenarios.

use super::world::{ApprovalWorkflowWorld, run_async};
use eyre::WrapErr;
use mockable::DefaultClock;
use productsdata::product::{
    domain::{NewProduct, ProductId, ProductStatus},
    ports::ProductRepository,
};
use rstest_bdd_macros::given;
use rust_decimal::Decimal;

#[given(r#"an active product named "{name}""#)]
fn active_product(world: &mut ApprovalWorkflowWorld, name: String) -> Result<(), eyre::Report> {
    let draft = NewProduct::new(
        name,
        Decimal::new(12500, 2),
        ProductStatus::active(),
        &DefaultClock,
    )?;
    let product = run_async(world.products.insert(draft)).wrap_err("seed product")?;
    world.target = Some(product.id());
    Ok(())
}

#[given("a product id {id:i64} that does not exist")]
fn missing_product(world: &mut ApprovalWorkflowWorld, id: i64) -> Result<(), eyre::Report> {
    let product_id = ProductId::new(id);
    let existing = run_async(world.products.find_by_id(product_id)).wrap_err("check product")?;
    eyre::ensure!(existing.is_none(), "product {id} unexpectedly exists");
    world.target = Some(product_id);
    Ok(())
}
