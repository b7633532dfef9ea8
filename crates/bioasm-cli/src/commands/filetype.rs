use crate::cli::FiletypeArgs;
use crate::error::Result;
use bioasm::core::io::filetype::guess_filetype;

pub fn run(args: FiletypeArgs) -> Result<()> {
    let filetype = guess_filetype(&args.filename);
    println!("{}", filetype);
    Ok(())
}
