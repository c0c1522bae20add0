use anyhow::Result;

use xpost_core::Post;

pub fn run(posts: &[Post]) -> Result<()> {
    if posts.is_empty() {
        println!("No posts.");
        return Ok(());
    }

    println!("Posts ({}):\n", posts.len());

    for post in posts {
        println!("  {} {}", post.user_name, post.byline());
        println!("    {}", post.content);
        match post.link_label() {
            Some(label) => println!("    Link: {}", label),
            None => println!("    (no link)"),
        }
        println!();
    }

    Ok(())
}
