//! Then steps for approval workflow BDD scenarios.

use super::world::{ApprovalWorkflowWorld, run_async};
use productsdata::{
    product::ports::{ApprovalQueueRepository, ProductRepository},
    response::{ApiReply, MessageResponse, ReplyBody},
};
use rstest_bdd_macros::then;

fn last_reply(world: &ApprovalWorkflowWorld) -> Result<&ApiReply<MessageResponse>, eyre::Report> {
    world
        .last_reply
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing reply in scenario world"))
}

#[then("the reply status is {code:u16}")]
fn reply_status_is(world: &ApprovalWorkflowWorld, code: u16) -> Result<(), eyre::Report> {
    let actual = last_reply(world)?.status().code();
    eyre::ensure!(actual == code, "expected status {code}, found {actual}");
    Ok(())
}

#[then(r#"the reply message is "{message}""#)]
fn reply_message_is(world: &ApprovalWorkflowWorld, message: String) -> Result<(), eyre::Report> {
    let actual = match last_reply(world)?.body() {
        ReplyBody::Payload(envelope) | ReplyBody::Message(envelope) => envelope.message(),
    };
    eyre::ensure!(
        actual == message,
        "expected message {message:?}, found {actual:?}"
    );
    Ok(())
}

#[then("the approval queue length for the product is {count:usize}")]
fn queue_length_is(world: &ApprovalWorkflowWorld, count: usize) -> Result<(), eyre::Report> {
    let product_id = world
        .target
        .ok_or_else(|| eyre::eyre!("missing target product in scenario world"))?;
    let entries = run_async(world.queue.list_by_date())?;
    let matching = entries
        .iter()
        .filter(|entry| entry.product_id() == product_id)
        .count();

    eyre::ensure!(
        matching == count,
        "expected {count} queued entries, found {matching}"
    );
    eyre::ensure!(
        entries.len() == matching,
        "queue holds entries for other products"
    );
    Ok(())
}

#[then("the product is still stored")]
fn product_still_stored(world: &ApprovalWorkflowWorld) -> Result<(), eyre::Report> {
    let product_id = world
        .target
        .ok_or_else(|| eyre::eyre!("missing target product in scenario world"))?;
    let stored = run_async(world.products.find_by_id(product_id))?;
    eyre::ensure!(stored.is_some(), "product {product_id} was removed");
    Ok(())
}
