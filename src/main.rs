use anyhow::{Context, Result};
use bumpalo::Bump;
use log::info;
use rand::Rng;
use sorted_list_bench::{
    names,
    timing::{measure, Action, Timing},
    SortedLinkedList, SortedVec,
};
use std::{env, process};

const DEFAULT_NAMES: &str = "resources/names.txt";
const LINKED_LIST: &str = "Linked List";
const ARRAY_LIST: &str = "Array List";

fn report(action: Action, count: usize, container: &str, elapsed: std::time::Duration) {
    println!(
        "{}",
        Timing {
            action,
            count,
            container,
            elapsed,
        }
    );
}

/*
 * Sorted linked list of names : add them all, then remove the first half
 */
fn linked_list_names(names: &[&str]) {
    info!("adding {} names to a sorted linked list", names.len());
    println!("Adding elements in Linked List:");
    let mut list = SortedLinkedList::new();
    let ((), elapsed) = measure(|| {
        for name in names {
            list.insert(*name);
        }
    });
    report(Action::Add, names.len(), LINKED_LIST, elapsed);
    println!("{}", list);

    let half = &names[..names.len() / 2];
    info!("removing {} names from the sorted linked list", half.len());
    println!("Removing elements in Linked List:");
    let (removed, elapsed) = measure(|| half.iter().filter(|name| list.remove(*name)).count());
    report(Action::Remove, half.len(), LINKED_LIST, elapsed);
    println!("{}", list);
    info!("{} removals matched, {} names left", removed, list.size());
}

/*
 * Same container with another element type : random integers in 0..count
 */
fn linked_list_integers(count: usize) {
    info!("adding {} random integers to a sorted linked list", count);
    println!("Adding elements in Linked List (Integers):");
    let mut rng = rand::thread_rng();
    let values: Vec<u32> = (0..count).map(|_| rng.gen_range(0..count as u32)).collect();
    let mut list = SortedLinkedList::new();
    let ((), elapsed) = measure(|| {
        for v in &values {
            list.insert(*v);
        }
    });
    report(Action::Add, count, LINKED_LIST, elapsed);
    println!("{}", list);
}

/*
 * Baseline : vector sorted after every push
 */
fn array_list_names(names: &[&str]) {
    info!("adding {} names to a sorted vector", names.len());
    println!("Adding elements in Array List:");
    let mut vec = SortedVec::new();
    let ((), elapsed) = measure(|| {
        for name in names {
            vec.push(*name);
        }
    });
    report(Action::Add, names.len(), ARRAY_LIST, elapsed);
    println!("{:?}", &*vec);

    let half = &names[..names.len() / 2];
    info!("removing {} names from the sorted vector", half.len());
    println!("Removing elements in Array List:");
    let ((), elapsed) = measure(|| {
        for name in half {
            vec.remove_item(name);
        }
    });
    report(Action::Remove, half.len(), ARRAY_LIST, elapsed);
    println!("{:?}", &*vec);
}

fn main() -> Result<()> {
    env_logger::init();

    if env::args().len() > 3 {
        println!(
            "Usage : {} [names file] [count]",
            env::args().next().unwrap_or_default()
        );
        process::exit(1);
    }
    let mut args = env::args().skip(1);
    let path = args.next().unwrap_or_else(|| DEFAULT_NAMES.to_string());

    let bump = Bump::new();
    let all = names::load(&path, &bump).context("Failed to load names")?;
    let count = match args.next() {
        Some(count) => count
            .parse()
            .with_context(|| format!("Invalid name count {}", count))?,
        None => all.len(),
    };
    let names = names::take(&all, count)?;
    info!("benchmarking with {} names from {}", names.len(), path);

    linked_list_names(names);
    linked_list_integers(names.len());
    array_list_names(names);

    Ok(())
}
