// Quick demonstration of snapshot history with eviction
// Run with: cargo run --bin demo_history

use cart_history::{Cart, HistoryManager, Money};

fn print_cart(step: &str, cart: &Cart, history: &HistoryManager) {
    println!(
        "{:<28} history={} redo={}",
        step,
        history.history_depth(),
        history.redo_depth()
    );
    if cart.is_empty() {
        println!("   (empty)");
    }
    for item in cart.items() {
        println!("   {}", item);
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    cart_history::init_logging();

    println!("Cart History - Snapshot Undo/Redo Demo");
    println!("======================================");

    let mut history = HistoryManager::new(3)?;
    let mut cart = Cart::new();

    history.record(&cart);
    print_cart("record(empty)", &cart, &history);

    let _ = cart.add_or_increment(1, "Notebook", 2, Money::from_units(10));
    history.record(&cart);
    print_cart("add #1 x2 @ 10", &cart, &history);

    let _ = cart.add_or_increment(2, "Pen", 1, Money::from_units(5));
    history.record(&cart);
    print_cart("add #2 x1 @ 5", &cart, &history);

    let _ = cart.remove_or_decrement(1, 0);
    history.record(&cart);
    print_cart("remove #1 (oldest evicted)", &cart, &history);

    println!("\nundo -> {:?}", history.undo(&mut cart));
    print_cart("after undo", &cart, &history);

    println!("undo -> {:?}", history.undo(&mut cart));
    print_cart("after undo", &cart, &history);

    println!("undo -> {:?}", history.undo(&mut cart));

    println!("\nredo -> {:?}", history.redo(&mut cart));
    println!("redo -> {:?}", history.redo(&mut cart));
    print_cart("after two redos", &cart, &history);

    println!("redo -> {:?}", history.redo(&mut cart));

    Ok(())
}
