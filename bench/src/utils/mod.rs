pub mod cpu_name;
