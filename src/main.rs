// Copyright 2018 Chris Pearce
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

mod command_line_args;

use apriori::{read_transaction_matrix, Apriori, Result};
use command_line_args::{parse_args_or_exit, Arguments};
use log::{error, info, LevelFilter};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

use std::fs::File;
use std::io::{BufWriter, Write};
use std::process;
use std::time::Instant;

fn mine_apriori(args: &Arguments) -> Result<()> {
    info!("Mining data set: {}", args.input_file_path);
    let start = Instant::now();

    let timer = Instant::now();
    let matrix = read_transaction_matrix(&args.input_file_path)?;
    info!(
        "Loaded {} transactions over {} items in {} ms.",
        matrix.num_transactions(),
        matrix.num_items(),
        timer.elapsed().as_millis()
    );

    let miner = Apriori::new(args.min_support, args.min_confidence);
    let itemizer = matrix.itemizer();

    let timer = Instant::now();
    let (itemsets, rules) = miner.mine_itemsets_and_rules(&matrix);
    info!(
        "Apriori generated {} frequent itemsets and {} rules in {} ms.",
        itemsets.len(),
        rules.len(),
        timer.elapsed().as_millis()
    );

    if let Some(ref path) = args.output_itemsets_path {
        let mut output = BufWriter::new(File::create(path)?);
        writeln!(output, "Itemset,Support")?;
        for itemset in itemsets {
            writeln!(
                output,
                "{},{}",
                itemset.itemset.to_string(itemizer),
                itemset.support
            )?;
        }
        output.flush()?;
    }

    {
        let mut output = BufWriter::new(File::create(&args.output_rules_path)?);
        writeln!(output, "Antecedent,Consequent,Confidence,Lift,Support")?;
        for rule in rules {
            writeln!(
                output,
                "{},{},{},{},{}",
                rule.antecedent().to_string(itemizer),
                rule.consequent().to_string(itemizer),
                rule.confidence(),
                rule.lift(),
                rule.support()
            )?;
        }
        output.flush()?;
    }

    info!("Total runtime: {} ms", start.elapsed().as_millis());

    Ok(())
}

fn main() {
    let arguments = parse_args_or_exit();

    let level = if arguments.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    if let Err(err) = TermLogger::init(
        level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    ) {
        eprintln!("Failed to initialise logging: {}", err);
    }

    if let Err(err) = mine_apriori(&arguments) {
        error!("Error: {}", err);
        process::exit(1);
    }
}
