use glint::{Highlighter, Rgba};

pub static CODE: &str = r#"<!-- A tiny page -->
<div class="greeting">
    <script>
        let shout = (s) => s.replace(/!/g, "!!");
        console.log(shout('hi!'));
    </script>
</div>
"#;

fn main() -> Result<(), glint::Error> {
    let fg: Rgba = "#2E3440".parse()?;
    let bg: Rgba = "#ECEFF4".parse()?;
    let h = Highlighter::new().foreground(fg).background(bg);
    println!("<!DOCTYPE html>");
    println!("<html><body style=\"background: {bg}\">");
    println!("<pre style=\"color: {fg}\">{}</pre>", h.run(CODE));
    println!("</body></html>");
    Ok(())
}
