//! A small console wired from the registry and the variable store.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};
use std::thread;

use hearth::{Args, Command, CommandRegistry, Route, SimpleCommand, Value, VarError, Variables};

type Handler = fn(&Args, &Variables) -> Result<String, VarError>;

fn cmd_set(args: &Args, vars: &Variables) -> Result<String, VarError> {
    let (Some(name), Some(raw)) = (args.get(0), args.get(1)) else {
        return Ok("Usage: set <name> <value>".to_string());
    };

    if let Ok(n) = raw.parse::<i32>() {
        vars.set_int(name, n);
    } else if let Ok(b) = raw.parse::<bool>() {
        vars.set_bool(name, b);
    } else {
        vars.set_string(name, raw);
    }
    Ok(format!("{} = {}", name, raw))
}

fn cmd_get(args: &Args, vars: &Variables) -> Result<String, VarError> {
    let Some(name) = args.get(0) else {
        return Ok("Usage: get <name>".to_string());
    };
    Ok(match vars.get(name) {
        Some(value) => format!("{} = {}", name, value),
        None => format!("{} is not set", name),
    })
}

fn cmd_unset(args: &Args, vars: &Variables) -> Result<String, VarError> {
    let Some(name) = args.get(0) else {
        return Ok("Usage: unset <name>".to_string());
    };
    vars.remove(name);
    Ok(format!("{} unset", name))
}

fn cmd_add(args: &Args, vars: &Variables) -> Result<String, VarError> {
    let Some(name) = args.get(0) else {
        return Ok("Usage: add <name> <amount>".to_string());
    };
    let amount = args.get(1).and_then(|a| a.parse::<i32>().ok()).unwrap_or(1);
    let total = vars.get_int(name, 0)? + amount;
    vars.set_int(name, total);
    Ok(format!("{} = {}", name, total))
}

struct Console {
    registry: CommandRegistry<SimpleCommand<Handler>>,
    vars: Variables,
    // Serializes handlers, so a read-modify-write like `add` is atomic.
    turn: Mutex<()>,
}

impl Console {
    fn new() -> Self {
        let mut registry = CommandRegistry::new();
        registry.add(SimpleCommand::new("set", cmd_set as Handler).with_usage("set <name> <value>"));
        registry.add(SimpleCommand::new("get", cmd_get as Handler).with_usage("get <name>"));
        registry.add(SimpleCommand::new("unset", cmd_unset as Handler).with_usage("unset <name>"));
        registry.add(SimpleCommand::new("add", cmd_add as Handler).with_usage("add <name> [amount]"));

        Self {
            registry,
            vars: Variables::new(),
            turn: Mutex::new(()),
        }
    }

    fn run(&self, line: &str) -> Result<String, VarError> {
        match self.registry.route(line) {
            Route::Empty => Ok(String::new()),
            Route::Unknown { name, .. } => Ok(format!("Unknown command '{}'", name)),
            Route::Found { command, args } => {
                let _turn = self.turn.lock().unwrap_or_else(PoisonError::into_inner);
                (command.handler())(&args, &self.vars)
            }
        }
    }
}

#[test]
fn set_and_get_through_lines() {
    let console = Console::new();
    assert_eq!(console.run("set motd \"Welcome home\"").unwrap(), "motd = Welcome home");
    assert_eq!(console.run("get motd").unwrap(), "motd = Welcome home");
    assert_eq!(console.vars.get("motd"), Some(Value::from("Welcome home")));
}

#[test]
fn typed_values_from_text() {
    let console = Console::new();
    console.run("set gold 50").unwrap();
    console.run("set pvp true").unwrap();

    assert_eq!(console.vars.get_int("gold", 0).unwrap(), 50);
    assert!(console.vars.get_bool("pvp", false).unwrap());
}

#[test]
fn unset_then_get() {
    let console = Console::new();
    console.run("set x 1").unwrap();
    console.run("unset x").unwrap();
    assert_eq!(console.run("get x").unwrap(), "x is not set");
    assert!(!console.vars.has("x"));
}

#[test]
fn type_mismatch_surfaces_to_the_caller() {
    let console = Console::new();
    console.run("set name Tin").unwrap();

    let err = console.run("add name 2").unwrap_err();
    assert!(err.to_string().contains("'name'"));
    assert!(err.to_string().contains("int"));
    assert!(err.to_string().contains("string"));

    // Store is untouched and still usable.
    assert_eq!(console.vars.get_string("name", "").unwrap(), "Tin");
}

#[test]
fn unknown_command_is_not_an_error() {
    let console = Console::new();
    assert_eq!(console.run("fly away").unwrap(), "Unknown command 'fly'");
}

#[test]
fn concurrent_sessions_share_one_store() {
    let console = Arc::new(Console::new());

    let sessions: Vec<_> = (0..4)
        .map(|_| {
            let console = Arc::clone(&console);
            thread::spawn(move || {
                for _ in 0..25 {
                    console.run("add visits").unwrap();
                }
            })
        })
        .collect();

    for session in sessions {
        session.join().unwrap();
    }

    assert_eq!(console.vars.get_int("visits", 0).unwrap(), 100);
    assert_eq!(console.vars.count(), 1);
}

#[test]
fn snapshot_persists_as_json() {
    let console = Console::new();
    console.run("set gold 50").unwrap();
    console.run("set title \"the Brave\"").unwrap();

    let json = serde_json::to_string(&console.vars.snapshot()).unwrap();
    let restored: HashMap<String, Value> = serde_json::from_str(&json).unwrap();

    let reloaded = Variables::new();
    reloaded.load_all(restored);
    assert_eq!(reloaded.get_int("gold", 0).unwrap(), 50);
    assert_eq!(reloaded.get_string("title", "").unwrap(), "the Brave");
}

#[test]
fn cache_follows_console_mutations() {
    let console = Console::new();
    console.run("set hp 10").unwrap();

    let render = |map: &HashMap<String, Value>| {
        let mut pairs: Vec<String> = map.iter().map(|(k, v)| format!("{}:{}", k, v)).collect();
        pairs.sort();
        pairs.join(";")
    };

    assert_eq!(console.vars.cached_or_insert_with(render), "hp:10");
    console.run("set mp 3").unwrap();
    assert_eq!(console.vars.cache(), None);
    assert_eq!(console.vars.cached_or_insert_with(render), "hp:10;mp:3");
}
