use argmark::{Flag, Registry, ValueFlag};

fn main() {
    let mut registry = Registry::new();
    let input = registry
        .add(
            ValueFlag::string(["-i", "--input"], "The file to copy.", "<path>")
                .unwrap()
                .required(),
        )
        .unwrap();
    let output = registry
        .add(
            ValueFlag::string(
                ["-o", "--output"],
                "Where to copy to. Defaults to\nthe input, suffixed with '.copy'.",
                "<path>",
            )
            .unwrap(),
        )
        .unwrap();
    let copies = registry
        .add(ValueFlag::<u32>::parsed(["-n", "--copies"], "How many copies to make.", "<count>").unwrap())
        .unwrap();
    let verbose = registry
        .add(Flag::new(["-v", "--verbose"], "Log verbosely.").unwrap())
        .unwrap();

    let result = registry.parse_env();
    let input = result.value(&input).unwrap();
    let output = match result.last_value(&output) {
        Ok(path) => path.clone(),
        Err(_) => format!("{input}.copy"),
    };
    let copies = result.value(&copies).copied().unwrap_or(1);

    if result.has(&verbose) {
        println!("Copying '{input}' to '{output}' ({copies} times).");
    }

    for i in 0..copies {
        println!("{input} -> {output} [{i}]");
    }
}
