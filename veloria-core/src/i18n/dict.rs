//! Translation tables.

pub(super) const EN: &[(&str, &str)] = &[
    ("auth.validation.emailRequired", "Email is required"),
    ("auth.validation.emailInvalid", "Please enter a valid email"),
    ("auth.validation.passwordRequired", "Password is required"),
    ("auth.validation.passwordTooShort", "Password must be at least 6 characters"),
    ("auth.validation.nameRequired", "Name is required"),
    ("auth.validation.confirmRequired", "Please confirm your password"),
    ("auth.validation.passwordMismatch", "Passwords do not match"),
    ("calendar.title", "Calendar"),
    ("calendar.booking", "Booking"),
    ("calendar.allDay", "All day"),
    ("calendar.view.month", "Month"),
    ("calendar.view.week", "Week"),
    ("calendar.view.day", "Day"),
    ("calendar.view.list", "List"),
    ("calendar.weekdays.mon", "Mon"),
    ("calendar.weekdays.tue", "Tue"),
    ("calendar.weekdays.wed", "Wed"),
    ("calendar.weekdays.thu", "Thu"),
    ("calendar.weekdays.fri", "Fri"),
    ("calendar.weekdays.sat", "Sat"),
    ("calendar.weekdays.sun", "Sun"),
    ("calendar.sheet.none", "No bookings"),
    ("calendar.dayDetails.withBookings", "{count} bookings"),
    ("calendar.dayDetails.noBookings", "No bookings for this day"),
    ("calendar.freeSlots.hint", "Weekends are usually free"),
    ("booking.defaultTitle", "Booking"),
    ("booking.master.you", "You"),
    ("booking.alert.created", "Booking created"),
    ("clients.title", "Clients"),
    ("clients.empty", "No clients found"),
    ("clients.validation.nameTooShort", "Enter the client's name (at least 2 characters)."),
    ("services.title", "Services"),
    ("services.empty", "No services yet"),
    ("services.validation.nameRequired", "Enter a service name"),
    ("services.validation.durationPositive", "Duration must be greater than 0"),
    ("services.validation.priceNegative", "Price cannot be negative"),
    ("settings.validation.nameRequired", "Name is required"),
    ("settings.validation.emailRequired", "Email is required"),
    ("settings.validation.emailInvalid", "Please enter a valid email"),
    ("settings.notice.profileUpdated", "Profile updated"),
    ("subscription.free", "Free"),
    ("subscription.perMonth", "per month"),
];

pub(super) const RU: &[(&str, &str)] = &[
    ("auth.validation.emailRequired", "Введите email"),
    ("auth.validation.emailInvalid", "Введите корректный email"),
    ("auth.validation.passwordRequired", "Введите пароль"),
    ("auth.validation.passwordTooShort", "Пароль должен быть не короче 6 символов"),
    ("auth.validation.nameRequired", "Введите имя"),
    ("auth.validation.confirmRequired", "Подтвердите пароль"),
    ("auth.validation.passwordMismatch", "Пароли не совпадают"),
    ("calendar.title", "Календарь"),
    ("calendar.booking", "Запись"),
    ("calendar.allDay", "Весь день"),
    ("calendar.view.month", "Месяц"),
    ("calendar.view.week", "Неделя"),
    ("calendar.view.day", "День"),
    ("calendar.view.list", "Список"),
    ("calendar.weekdays.mon", "Пн"),
    ("calendar.weekdays.tue", "Вт"),
    ("calendar.weekdays.wed", "Ср"),
    ("calendar.weekdays.thu", "Чт"),
    ("calendar.weekdays.fri", "Пт"),
    ("calendar.weekdays.sat", "Сб"),
    ("calendar.weekdays.sun", "Вс"),
    ("calendar.sheet.none", "Нет записей"),
    ("calendar.dayDetails.withBookings", "Записей: {count}"),
    ("calendar.dayDetails.noBookings", "На этот день записей нет"),
    ("booking.defaultTitle", "Запись"),
    ("booking.master.you", "Вы"),
    ("booking.alert.created", "Запись создана"),
    ("clients.title", "Клиенты"),
    ("clients.empty", "Клиенты не найдены"),
    ("clients.validation.nameTooShort", "Введите имя клиента (минимум 2 символа)."),
    ("services.title", "Услуги"),
    ("services.empty", "Услуг пока нет"),
    ("services.validation.nameRequired", "Введите название услуги"),
    ("services.validation.durationPositive", "Длительность должна быть больше 0"),
    ("services.validation.priceNegative", "Цена не может быть отрицательной"),
    ("settings.validation.nameRequired", "Введите имя"),
    ("settings.validation.emailRequired", "Введите email"),
    ("settings.validation.emailInvalid", "Введите корректный email"),
    ("settings.notice.profileUpdated", "Профиль обновлён"),
    ("subscription.free", "Бесплатно"),
    ("subscription.perMonth", "в месяц"),
];

pub(super) const MONTHS_EN: [&str; 12] = [
    "January", "February", "March", "April", "May", "June",
    "July", "August", "September", "October", "November", "December",
];

pub(super) const MONTHS_RU: [&str; 12] = [
    "январь", "февраль", "март", "апрель", "май", "июнь",
    "июль", "август", "сентябрь", "октябрь", "ноябрь", "декабрь",
];

/// Month names as used after a day number ("14 февраля").
pub(super) const MONTHS_RU_GENITIVE: [&str; 12] = [
    "января", "февраля", "марта", "апреля", "мая", "июня",
    "июля", "августа", "сентября", "октября", "ноября", "декабря",
];

pub(super) const WEEKDAYS_EN: [&str; 7] = [
    "Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday", "Sunday",
];

pub(super) const WEEKDAYS_RU: [&str; 7] = [
    "понедельник", "вторник", "среда", "четверг", "пятница", "суббота", "воскресенье",
];
