fn main() {
    jobscrape::cli::run();
}
