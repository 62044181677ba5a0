//! Randomized operation sequences
//!
//! Runs long seeded sequences of mutate+record, undo and redo against the
//! engine and a plain Vec-based model, checking after every step that:
//! - the top of the past stack matches the cart
//! - the past stack never exceeds capacity
//! - recording empties the future stack

use cart_history::{Cart, HistoryManager, Money, RedoOutcome, UndoOutcome};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

struct Model {
    past: Vec<Cart>,
    future: Vec<Cart>,
    capacity: usize,
}

impl Model {
    fn record(&mut self, cart: &Cart) {
        self.past.push(cart.clone());
        if self.past.len() > self.capacity {
            self.past.remove(0);
        }
        self.future.clear();
    }

    fn undo(&mut self) -> Option<Cart> {
        if self.past.len() < 2 {
            return None;
        }
        let current = self.past.pop()?;
        self.future.push(current);
        self.past.last().cloned()
    }

    fn redo(&mut self) -> Option<Cart> {
        let next = self.future.pop()?;
        self.past.push(next.clone());
        Some(next)
    }
}

fn mutate(cart: &mut Cart, rng: &mut StdRng) {
    let id = rng.gen_range(1..=5u32);
    match rng.gen_range(0..10) {
        0..=4 => {
            let quantity = rng.gen_range(0..4u32);
            let price = Money::from_cents(rng.gen_range(0..2000));
            let _ = cart.add_or_increment(id, format!("item-{id}"), quantity, price);
        }
        5..=8 => {
            let amount = rng.gen_range(-1..4i64);
            let _ = cart.remove_or_decrement(id, amount);
        }
        _ => cart.clear(),
    }
}

fn check_cart_invariants(cart: &Cart) {
    let mut ids: Vec<u32> = cart.items().iter().map(|i| i.id).collect();
    assert!(cart.items().iter().all(|i| i.quantity > 0));
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), cart.len(), "duplicate ids in cart");
}

fn run_sequence(seed: u64, capacity: usize, steps: usize) {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut history = HistoryManager::new(capacity).unwrap();
    let mut model = Model {
        past: Vec::new(),
        future: Vec::new(),
        capacity,
    };
    let mut cart = Cart::new();
    let mut expected = Cart::new();

    history.record(&cart);
    model.record(&expected);

    for step in 0..steps {
        match rng.gen_range(0..10) {
            0..=5 => {
                mutate(&mut cart, &mut rng);
                expected = cart.clone();
                history.record(&cart);
                model.record(&expected);
                assert_eq!(history.redo_depth(), 0);
            }
            6..=7 => {
                let outcome = history.undo(&mut cart);
                match model.undo() {
                    Some(state) => {
                        assert_eq!(outcome, UndoOutcome::Applied, "step {}", step);
                        expected = state;
                    }
                    None => assert_eq!(outcome, UndoOutcome::NothingToUndo, "step {}", step),
                }
            }
            _ => {
                let outcome = history.redo(&mut cart);
                match model.redo() {
                    Some(state) => {
                        assert_eq!(outcome, RedoOutcome::Applied, "step {}", step);
                        expected = state;
                    }
                    None => assert_eq!(outcome, RedoOutcome::NothingToRedo, "step {}", step),
                }
            }
        }

        assert_eq!(cart, expected, "seed {} step {}", seed, step);
        check_cart_invariants(&cart);
        assert!(history.history_depth() <= capacity);
        assert_eq!(history.history_depth(), model.past.len());
        assert_eq!(history.redo_depth(), model.future.len());
        assert_eq!(history.current().unwrap().items(), cart.items());
    }
}

#[test]
fn test_random_sequences_small_capacity() {
    for seed in 0..20 {
        run_sequence(seed, 3, 300);
    }
}

#[test]
fn test_random_sequences_capacity_one() {
    for seed in 100..105 {
        run_sequence(seed, 1, 200);
    }
}

#[test]
fn test_random_sequences_large_capacity() {
    for seed in 200..205 {
        run_sequence(seed, 50, 1000);
    }
}
