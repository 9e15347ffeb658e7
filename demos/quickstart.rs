use chrono::Local;
use prayer_times::{get_calculation_method, Coordinates, HighLatitudeMethod, PrayerManager};

fn main() {
    let method = get_calculation_method("MWL", false).expect("MWL is a preset");
    let manager = PrayerManager::new(method, Some(HighLatitudeMethod::AngleBased));
    let here = Coordinates::new(51.5072, -0.1276).with_altitude(11.0);

    let today = Local::now();
    let times = manager.get_times(&today, here);

    println!("{}", today.date_naive());
    for (prayer, hours) in times.iter() {
        println!("{prayer:>9}: {hours:.4} h");
    }
}
