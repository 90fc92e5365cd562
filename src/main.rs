use seqlist::SeqList;

fn main() {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let mut list: SeqList<i32> = SeqList::new();
    list.init();
    println!("list = {}", list);

    for (index, value) in [(0, 1), (1, 2), (2, 3), (3, 4), (2, 5)] {
        if let Err(err) = list.insert(index, value) {
            println!("insert {} at {} failed: {}", value, index, err);
        }
    }
    println!("list = {}", list);
    println!("list len = {}", list.len());

    match list.locate(&0) {
        Ok(index) => println!("list locate 0 is {}", index),
        Err(err) => println!("list locate 0 err is {}", err),
    }

    list.clear();
    println!("list len = {}", list.len());

    match list.get(0) {
        Ok(value) => println!("list get 0 is {}", value),
        Err(err) => println!("list get 0 err is {}", err),
    }
    println!("list is empty is {}", list.is_empty());

    tracing::info!(len = list.len(), empty = list.is_empty(), "self-test finished");
}
