//! Builds a tiny campus, a ball, and prints what they compute.
//!
//! Set `CAMPUS_CURRENT_YEAR` to pin the current year, and `RUST_LOG=debug` to see relation
//! updates.

campus_rs::prelude! {
    repr::{Ball, Color},
}

fn date(year: i32) -> Res<NaiveDate> {
    NaiveDate::from_ymd_opt(year, 1, 1).ok_or_else(|| error!("illegal date for year {}", year))
}

pub fn run(ctx: &mut Ctx) -> Res<()> {
    let john = ctx.add_student("John Doe", date(2000)?, 0.0);
    let smith = ctx.add_instructor("Dr. Smith", date(1980)?, 50_000.0, date(2010)?, 1000.0);

    let cs = ctx.add_department("Computer Science", 1_000_000.0);
    ctx.set_department_head(cs, smith);
    ctx.assign_department(smith, cs);

    let prog = ctx.add_course("Programming 101");
    ctx.add_department_course(cs, prog);
    ctx.enroll(john, prog);
    ctx.add_grade(john, prog, 'A');

    println!("{}'s GPA: {}", ctx[john].name(), ctx.gpa_of(john));
    let salary = ctx.salary_of(ctx.instructor(smith))?;
    println!("{}'s Salary: {}", ctx[smith].name(), salary);

    let mut ball = Ball::new(5, Color::new(255, 0, 0));
    ball.throw();
    ball.throw();
    ball.pop();
    // popped, not counted
    ball.throw();

    println!("Ball throw count: {}", ball.throw_count());
    println!("Ball color grayscale: {}", ball.color().grayscale());
    Ok(())
}

fn main() {
    simple_logger::SimpleLogger::new()
        .env()
        .without_timestamps()
        .init()
        .expect("failed to init logger /(-_-)\\");

    let mut ctx = Ctx::with_clock(Clock::from_env());
    run(&mut ctx).unwrap_or_else(|err| {
        println!("an error occurred:");
        for line in err.to_string().lines() {
            println!("- {}", line)
        }
        panic!("run failed")
    });

    println!("\n|==| campus in {}", ctx.current_year());
    for line in ctx.to_pretty_string().lines() {
        println!("| {}", line);
    }
    println!("|==|")
}
