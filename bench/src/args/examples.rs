const EXAMPLES: &str = r#"EXAMPLES:

1) Buffer size sweep with defaults:

    Transfer 512 MiB from /dev/zero to /dev/null via dd for every multiplier
    in 1,2,4,...,1024 of the 4096 B base block, print the per-run table and
    the optimization analysis, and exit with the recommended multiplier:

    $ cargo r --bin meowlab-bench -r -- sweep

2) Sweep with custom parameters:

    Smaller volume and a shorter multiplier list finish quickly, which is
    handy when comparing machines:

    $ cargo r --bin meowlab-bench -r -- sweep --volume "64 MiB" --multipliers 1,4,16,64

    Reading a real file instead of /dev/zero:

    $ cargo r --bin meowlab-bench -r -- sweep --source /var/tmp/testfile --volume "128 MiB"

3) Performance summary:

    Print the recorded mycat1..mycat6 execution times next to the system cat
    baseline with rankings, findings and the optimization journey:

    $ cargo r --bin meowlab-bench -r -- summary

4) Storing results and charts:

    Both tools accept a trailing `output` subcommand which dumps report.json
    and renders HTML charts into a per-run directory:

    $ cargo r --bin meowlab-bench -r -- sweep output --output-dir performance_results
    $ cargo r --bin meowlab-bench -r -- summary output --output-dir performance_results --open-charts

    Results can be annotated for later comparison:

    $ cargo r --bin meowlab-bench -r -- sweep output --output-dir performance_results --remark 'nvme-raid' --gitref "$(git rev-parse --short HEAD)"

5) Other options:

    If more options are needed, please refer to the help menu:

    $ cargo r --bin meowlab-bench -r -- --help

    Each subcommand has it's own help:

    $ cargo r --bin meowlab-bench -r -- sweep --help
    $ cargo r --bin meowlab-bench -r -- summary --help
    $ cargo r --bin meowlab-bench -r -- sweep output --help

"#;

pub fn print_examples() {
    print!("{}", EXAMPLES)
}
