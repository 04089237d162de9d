//! Compiled-in Russian default strings.
//!
//! The secondary locale set. The table binds these under the `_RUS` key
//! suffix; constant names here stay unsuffixed because the module is the
//! locale. Slots that are not localized have no constant here: the
//! save-file stem, the empty-slot caption, and the background flat lump
//! names are shared with the primary set.

// general initialization and prompts

pub const D_DEVSTR: &str = "Режим разработчика ВКЛЮЧЕН.\n";
pub const D_CDROM: &str = "Версия CD-ROM: default.cfg из c:\\doomdata\n";
pub const QUITMSG: &str = "вы действительно хотите выйти\nиз этой замечательной игры?";
pub const LOADNET: &str = "невозможно загрузить игру\nв сетевой игре!\n\nнажмите любую клавишу.";
pub const QLOADNET: &str = "невозможна быстрая загрузка\nв сетевой игре!\n\nнажмите любую клавишу.";
pub const QSAVESPOT: &str = "слот быстрого сохранения не выбран!\n\nнажмите любую клавишу.";
pub const SAVEDEAD: &str = "невозможно сохранить игру,\nне начав её!\n\nнажмите любую клавишу.";
pub const QSPROMPT: &str = "перезаписать быстрое сохранение\n\n'%s'?\n\nнажмите y или n.";
pub const QLPROMPT: &str = "загрузить быстрое сохранение\n\n'%s'?\n\nнажмите y или n.";
pub const NEWGAME: &str = "невозможно начать новую игру\nв сетевой игре.\n\nнажмите любую клавишу.";
pub const NIGHTMARE: &str =
    "уверены? этот уровень сложности\nдаже отдалённо не является честным.\n\nнажмите y или n.";
pub const SWSTRING: &str =
    "это демонстрационная версия doom.\n\nвам необходимо приобрести всю трилогию.\n\nнажмите любую клавишу.";
pub const MSGOFF: &str = "Сообщения ВЫКЛЮЧЕНЫ";
pub const MSGON: &str = "Сообщения ВКЛЮЧЕНЫ";
pub const NETEND: &str = "невозможно закончить сетевую игру!\n\nнажмите любую клавишу.";
pub const ENDGAME: &str = "вы действительно хотите закончить игру?\n\nнажмите y или n.";
pub const DETAILHI: &str = "Высокая детализация";
pub const DETAILLO: &str = "Низкая детализация";
pub const GGSAVED: &str = "игра сохранена.";
pub const GGLOADED: &str = "игра загружена.";

// messages when the player gets things

pub const GOTARMOR: &str = "Получена броня.";
pub const GOTMEGA: &str = "Получена мегаброня!";
pub const GOTHTHBONUS: &str = "Получен бонус здоровья.";
pub const GOTARMBONUS: &str = "Получен бонус брони.";
pub const GOTSTIM: &str = "Получен стимулятор.";
pub const GOTMEDINEED: &str = "Получена крайне необходимая аптечка!";
pub const GOTMEDIKIT: &str = "Получена аптечка.";
pub const GOTSUPER: &str = "Суперзаряд!";
pub const GOTBLUECARD: &str = "Получена синяя ключ-карта.";
pub const GOTYELWCARD: &str = "Получена жёлтая ключ-карта.";
pub const GOTREDCARD: &str = "Получена красная ключ-карта.";
pub const GOTBLUESKUL: &str = "Получен синий ключ-череп.";
pub const GOTYELWSKUL: &str = "Получен жёлтый ключ-череп.";
pub const GOTREDSKULL: &str = "Получен красный ключ-череп.";
pub const GOTINVUL: &str = "Неуязвимость!";
pub const GOTBERSERK: &str = "Берсерк!";
pub const GOTINVIS: &str = "Частичная невидимость";
pub const GOTSUIT: &str = "Костюм радиационной защиты";
pub const GOTMAP: &str = "Карта местности";
pub const GOTVISOR: &str = "Визор усиления света";
pub const GOTMSPHERE: &str = "Мегасфера!";
pub const GOTCLIP: &str = "Получена обойма.";
pub const GOTCLIPBOX: &str = "Получена коробка патронов.";
pub const GOTROCKET: &str = "Получена ракета.";
pub const GOTROCKET2: &str = "Получены две ракеты.";
pub const GOTROCKBOX: &str = "Получен ящик ракет.";
pub const GOTCELL: &str = "Получена энергобатарея.";
pub const GOTCELLBOX: &str = "Получен энергоаккумулятор.";
pub const GOTSHELLS: &str = "Получено 4 патрона для дробовика.";
pub const GOTSHELLS8: &str = "Получено 8 патронов для дробовика.";
pub const GOTSHELLBOX: &str = "Получена коробка патронов для дробовика.";
pub const GOTBACKPACK: &str = "Получен рюкзак, полный патронов!";
pub const GOTBFG9000: &str = "Получено BFG9000! О, да.";
pub const GOTCHAINGUN: &str = "Получен пулемёт!";
pub const GOTCHAINSAW: &str = "Бензопила! Найди немного мяса!";
pub const GOTLAUNCHER: &str = "Получена ракетница!";
pub const GOTPLASMA: &str = "Получено плазменное ружьё!";
pub const GOTSHOTGUN: &str = "Получен дробовик!";
pub const GOTSHOTGUN2: &str = "Получено двуствольное ружьё!";

// messages when keys are needed

pub const PD_BLUEO: &str = "Для активации объекта необходим синий ключ";
pub const PD_REDO: &str = "Для активации объекта необходим красный ключ";
pub const PD_YELLOWO: &str = "Для активации объекта необходим жёлтый ключ";
pub const PD_BLUEK: &str = "Для открытия этой двери необходим синий ключ";
pub const PD_REDK: &str = "Для открытия этой двери необходим красный ключ";
pub const PD_YELLOWK: &str = "Для открытия этой двери необходим жёлтый ключ";

// multiplayer messaging

pub const HUSTR_MSGU: &str = "[Сообщение не отправлено]";
pub const HUSTR_MESSAGESENT: &str = "[Сообщение отправлено]";
pub const HUSTR_CHATMACRO0: &str = "Нет";
pub const HUSTR_CHATMACRO1: &str = "Я готов надрать задницу!";
pub const HUSTR_CHATMACRO2: &str = "Я в порядке.";
pub const HUSTR_CHATMACRO3: &str = "Выгляжу я неважно!";
pub const HUSTR_CHATMACRO4: &str = "Помогите!";
pub const HUSTR_CHATMACRO5: &str = "Ты отстой!";
pub const HUSTR_CHATMACRO6: &str = "В следующий раз, мерзавец...";
pub const HUSTR_CHATMACRO7: &str = "Иди сюда!";
pub const HUSTR_CHATMACRO8: &str = "Я разберусь с этим.";
pub const HUSTR_CHATMACRO9: &str = "Да";
pub const HUSTR_TALKTOSELF1: &str = "Вы бормочете себе под нос";
pub const HUSTR_TALKTOSELF2: &str = "Кто здесь?";
pub const HUSTR_TALKTOSELF3: &str = "Вы пугаете сами себя";
pub const HUSTR_TALKTOSELF4: &str = "Вы начинаете бредить";
pub const HUSTR_TALKTOSELF5: &str = "Вы спятили...";
pub const HUSTR_PLRGREEN: &str = "Зелёный: ";
pub const HUSTR_PLRINDIGO: &str = "Индиго: ";
pub const HUSTR_PLRBROWN: &str = "Коричневый: ";
pub const HUSTR_PLRRED: &str = "Красный: ";

// level names in the automap

pub const HUSTR_E1M1: &str = "E1M1: Ангар";
pub const HUSTR_E1M2: &str = "E1M2: Атомная электростанция";
pub const HUSTR_E1M3: &str = "E1M3: Завод по переработке токсинов";
pub const HUSTR_E1M4: &str = "E1M4: Командный пункт";
pub const HUSTR_E1M5: &str = "E1M5: Лаборатория на Фобосе";
pub const HUSTR_E1M6: &str = "E1M6: Центр обработки";
pub const HUSTR_E1M7: &str = "E1M7: Вычислительный центр";
pub const HUSTR_E1M8: &str = "E1M8: Аномалия на Фобосе";
pub const HUSTR_E1M9: &str = "E1M9: Военная база";
pub const HUSTR_E2M1: &str = "E2M1: Аномалия на Деймосе";
pub const HUSTR_E2M2: &str = "E2M2: Зона хранения";
pub const HUSTR_E2M3: &str = "E2M3: Очистной завод";
pub const HUSTR_E2M4: &str = "E2M4: Лаборатория на Деймосе";
pub const HUSTR_E2M5: &str = "E2M5: Командный центр";
pub const HUSTR_E2M6: &str = "E2M6: Залы проклятых";
pub const HUSTR_E2M7: &str = "E2M7: Чаны порождений";
pub const HUSTR_E2M8: &str = "E2M8: Вавилонская башня";
pub const HUSTR_E2M9: &str = "E2M9: Крепость тайн";
pub const HUSTR_E3M1: &str = "E3M1: Крепость Ада";
pub const HUSTR_E3M2: &str = "E3M2: Трясина отчаяния";
pub const HUSTR_E3M3: &str = "E3M3: Пандемоний";
pub const HUSTR_E3M4: &str = "E3M4: Дом боли";
pub const HUSTR_E3M5: &str = "E3M5: Нечестивый собор";
pub const HUSTR_E3M6: &str = "E3M6: Гора Эреб";
pub const HUSTR_E3M7: &str = "E3M7: Лимб";
pub const HUSTR_E3M8: &str = "E3M8: Дит";
pub const HUSTR_E3M9: &str = "E3M9: Кроличьи норы";
pub const HUSTR_E4M1: &str = "E4M1: Преисподняя";
pub const HUSTR_E4M2: &str = "E4M2: Совершенная ненависть";
pub const HUSTR_E4M3: &str = "E4M3: Порази нечестивых";
pub const HUSTR_E4M4: &str = "E4M4: Неудержимое зло";
pub const HUSTR_E4M5: &str = "E4M5: Они покаются";
pub const HUSTR_E4M6: &str = "E4M6: Против тебя, нечестивого";
pub const HUSTR_E4M7: &str = "E4M7: И последовал Ад";
pub const HUSTR_E4M8: &str = "E4M8: До жестокости";
pub const HUSTR_E4M9: &str = "E4M9: Страх";
pub const HUSTR_1: &str = "уровень 1: вход";
pub const HUSTR_2: &str = "уровень 2: подземные залы";
pub const HUSTR_3: &str = "уровень 3: сквозь строй";
pub const HUSTR_4: &str = "уровень 4: средоточие";
pub const HUSTR_5: &str = "уровень 5: сточные туннели";
pub const HUSTR_6: &str = "уровень 6: пресс";
pub const HUSTR_7: &str = "уровень 7: проще простого";
pub const HUSTR_8: &str = "уровень 8: трюки и ловушки";
pub const HUSTR_9: &str = "уровень 9: яма";
pub const HUSTR_10: &str = "уровень 10: заправочная база";
pub const HUSTR_11: &str = "уровень 11: круг разрушения!";
pub const HUSTR_12: &str = "уровень 12: фабрика";
pub const HUSTR_13: &str = "уровень 13: деловой район";
pub const HUSTR_14: &str = "уровень 14: глубинные логова";
pub const HUSTR_15: &str = "уровень 15: промышленная зона";
pub const HUSTR_16: &str = "уровень 16: пригород";
pub const HUSTR_17: &str = "уровень 17: трущобы";
pub const HUSTR_18: &str = "уровень 18: внутренний двор";
pub const HUSTR_19: &str = "уровень 19: цитадель";
pub const HUSTR_20: &str = "уровень 20: попался!";
pub const HUSTR_21: &str = "уровень 21: нирвана";
pub const HUSTR_22: &str = "уровень 22: катакомбы";
pub const HUSTR_23: &str = "уровень 23: бочки удовольствия";
pub const HUSTR_24: &str = "уровень 24: пропасть";
pub const HUSTR_25: &str = "уровень 25: кровопады";
pub const HUSTR_26: &str = "уровень 26: заброшенные шахты";
pub const HUSTR_27: &str = "уровень 27: кондоминиум монстров";
pub const HUSTR_28: &str = "уровень 28: мир духов";
pub const HUSTR_29: &str = "уровень 29: живой предел";
pub const HUSTR_30: &str = "уровень 30: икона греха";
pub const HUSTR_31: &str = "уровень 31: вольфенштайн";
pub const HUSTR_32: &str = "уровень 32: гроссе";
pub const PHUSTR_1: &str = "уровень 1: конго";
pub const PHUSTR_2: &str = "уровень 2: колодец душ";
pub const PHUSTR_3: &str = "уровень 3: ацтек";
pub const PHUSTR_4: &str = "уровень 4: взаперти";
pub const PHUSTR_5: &str = "уровень 5: город-призрак";
pub const PHUSTR_6: &str = "уровень 6: логово барона";
pub const PHUSTR_7: &str = "уровень 7: захваченный двор";
pub const PHUSTR_8: &str = "уровень 8: царство";
pub const PHUSTR_9: &str = "уровень 9: скотобойня";
pub const PHUSTR_10: &str = "уровень 10: натиск";
pub const PHUSTR_11: &str = "уровень 11: загнанный";
pub const PHUSTR_12: &str = "уровень 12: скорость";
pub const PHUSTR_13: &str = "уровень 13: склеп";
pub const PHUSTR_14: &str = "уровень 14: генезис";
pub const PHUSTR_15: &str = "уровень 15: сумерки";
pub const PHUSTR_16: &str = "уровень 16: предзнаменование";
pub const PHUSTR_17: &str = "уровень 17: комплекс";
pub const PHUSTR_18: &str = "уровень 18: нейросфера";
pub const PHUSTR_19: &str = "уровень 19: враг";
pub const PHUSTR_20: &str = "уровень 20: владения смерти";
pub const PHUSTR_21: &str = "уровень 21: убийца";
pub const PHUSTR_22: &str = "уровень 22: невыполнимая миссия";
pub const PHUSTR_23: &str = "уровень 23: надгробие";
pub const PHUSTR_24: &str = "уровень 24: последний рубеж";
pub const PHUSTR_25: &str = "уровень 25: храм тьмы";
pub const PHUSTR_26: &str = "уровень 26: бункер";
pub const PHUSTR_27: &str = "уровень 27: антихрист";
pub const PHUSTR_28: &str = "уровень 28: канализация";
pub const PHUSTR_29: &str = "уровень 29: одиссея шумов";
pub const PHUSTR_30: &str = "уровень 30: врата ада";
pub const PHUSTR_31: &str = "уровень 31: киберлогово";
pub const PHUSTR_32: &str = "уровень 32: за дело!";
pub const THUSTR_1: &str = "уровень 1: центр управления системой";
pub const THUSTR_2: &str = "уровень 2: человеческое барбекю";
pub const THUSTR_3: &str = "уровень 3: пункт управления энергией";
pub const THUSTR_4: &str = "уровень 4: червоточина";
pub const THUSTR_5: &str = "уровень 5: ангар";
pub const THUSTR_6: &str = "уровень 6: сезон охоты";
pub const THUSTR_7: &str = "уровень 7: тюрьма";
pub const THUSTR_8: &str = "уровень 8: металл";
pub const THUSTR_9: &str = "уровень 9: твердыня";
pub const THUSTR_10: &str = "уровень 10: искупление";
pub const THUSTR_11: &str = "уровень 11: хранилище";
pub const THUSTR_12: &str = "уровень 12: кратер";
pub const THUSTR_13: &str = "уровень 13: переработка отходов";
pub const THUSTR_14: &str = "уровень 14: сталелитейный завод";
pub const THUSTR_15: &str = "уровень 15: мёртвая зона";
pub const THUSTR_16: &str = "уровень 16: глубочайшие недра";
pub const THUSTR_17: &str = "уровень 17: зона обработки";
pub const THUSTR_18: &str = "уровень 18: мельница";
pub const THUSTR_19: &str = "уровень 19: доставка/возрождение";
pub const THUSTR_20: &str = "уровень 20: центральный узел обработки";
pub const THUSTR_21: &str = "уровень 21: административный центр";
pub const THUSTR_22: &str = "уровень 22: среда обитания";
pub const THUSTR_23: &str = "уровень 23: лунный горный проект";
pub const THUSTR_24: &str = "уровень 24: карьер";
pub const THUSTR_25: &str = "уровень 25: логово барона";
pub const THUSTR_26: &str = "уровень 26: баллистикс";
pub const THUSTR_27: &str = "уровень 27: гора боли";
pub const THUSTR_28: &str = "уровень 28: чертовщина";
pub const THUSTR_29: &str = "уровень 29: река стикс";
pub const THUSTR_30: &str = "уровень 30: последний звонок";
pub const THUSTR_31: &str = "уровень 31: фараон";
pub const THUSTR_32: &str = "уровень 32: карибы";

// messages as a result of toggling states

pub const AMSTR_FOLLOWON: &str = "Режим следования ВКЛЮЧЕН";
pub const AMSTR_FOLLOWOFF: &str = "Режим следования ВЫКЛЮЧЕН";
pub const AMSTR_GRIDON: &str = "Сетка ВКЛЮЧЕНА";
pub const AMSTR_GRIDOFF: &str = "Сетка ВЫКЛЮЧЕНА";
pub const AMSTR_MARKEDSPOT: &str = "Отметка поставлена";
pub const AMSTR_MARKSCLEARED: &str = "Все отметки очищены";
pub const STSTR_MUS: &str = "Смена музыки";
pub const STSTR_NOMUS: &str = "НЕВОЗМОЖНЫЙ ВЫБОР";
pub const STSTR_DQDON: &str = "Режим неуязвимости ВКЛЮЧЕН";
pub const STSTR_DQDOFF: &str = "Режим неуязвимости ВЫКЛЮЧЕН";
pub const STSTR_KFAADDED: &str = "Боезапас, ключи и броня добавлены";
pub const STSTR_FAADDED: &str = "Боезапас добавлен (без ключей)";
pub const STSTR_KAADDED: &str = "Ключи добавлены";
pub const STSTR_NCON: &str = "Прохождение сквозь стены ВКЛЮЧЕНО";
pub const STSTR_NCOFF: &str = "Прохождение сквозь стены ВЫКЛЮЧЕНО";
pub const STSTR_BEHOLD: &str = "неУязв, Сила, Невид, Защ, Карта, Визор";
pub const STSTR_BEHOLDX: &str = "Способность активирована";
pub const STSTR_CHOPPERS: &str = "...не отстой - GM";
pub const STSTR_CLEV: &str = "Смена уровня...";

// episode intermission texts

pub const E1TEXT: &str = "Одолев громил и зачистив лунную базу,\n\
вы должны были победить, не так ли?\n\
Не так ли? Где заслуженная награда\n\
и билет домой? Что это, чёрт возьми?\n\
Так не должно было закончиться!\n\
\n\
Здесь пахнет гнилым мясом, но место\n\
похоже на потерянную базу на Деймосе.\n\
Похоже, вы застряли на Берегах Ада.\n\
Единственный путь наружу - насквозь.\n\
\n\
Чтобы продолжить погружение в DOOM,\n\
пройдите Берега Ада и их блистательное\n\
продолжение - Инферно!\n";

pub const E2TEXT: &str = "У вас получилось! Чудовищный\n\
кибердемон, правивший потерянной\n\
базой на Деймосе, повержен, и вы\n\
торжествуете! Но... где вы?\n\
Подобравшись к краю спутника, вы\n\
смотрите вниз и видите ужасную правду.\n\
\n\
Деймос парит над самим Адом!\n\
Никто ещё не сбегал из Ада, но вы\n\
заставите ублюдков пожалеть, что они\n\
вообще о вас услышали! Вы быстро\n\
спускаетесь по верёвке на поверхность\n\
Ада.\n\
\n\
Впереди - финальная глава DOOM!\n\
-- Инферно.";

pub const E3TEXT: &str = "Отвратительный паук-демон,\n\
руководивший вторжением на лунные\n\
базы и принёсший столько смертей,\n\
получил по заслугам раз и навсегда.\n\
\n\
Открывается потайная дверь, и вы\n\
входите. Вы оказались слишком крепки\n\
для Ада, и теперь он наконец играет\n\
честно: за дверью вас встречают\n\
зелёные поля Земли! Наконец-то дом.\n\
\n\
Интересно, что происходило на Земле,\n\
пока вы сражались со злом? Хорошо,\n\
что никто из адских тварей не смог\n\
пройти через эту дверь вместе с вами...";

pub const E4TEXT: &str = "паук-предводитель, должно быть, выслал\n\
вперёд свои легионы адских тварей до\n\
вашей финальной схватки с этим ужасным\n\
зверем из ада. но вы шагнули вперёд и\n\
обрекли орду на вечное проклятие и\n\
страдание, как поступил бы истинный\n\
герой перед лицом подобного зла.\n\
\n\
кроме того, кто-то должен был заплатить\n\
за то, что случилось с дейзи, вашей\n\
любимой крольчихой.\n\
\n\
теперь же перед вами - новые боль и\n\
разрушения: народ демонов бесчинствует\n\
в наших городах.\n\
\n\
следующая остановка - ад на земле!";

pub const C1TEXT: &str = "ВЫ ПРОНИКЛИ ВГЛУБЬ ЗАРАЖЁННОГО\n\
КОСМОПОРТА. НО ЧТО-ТО ЗДЕСЬ НЕ ТАК.\n\
МОНСТРЫ ПРИНЕСЛИ С СОБОЙ СОБСТВЕННУЮ\n\
РЕАЛЬНОСТЬ, И ТЕХНОЛОГИИ КОСМОПОРТА\n\
ПОДЧИНЯЮТСЯ ИХ ПРИСУТСТВИЮ.\n\
\n\
ВПЕРЕДИ ВЫ ВИДИТЕ АВАНПОСТ АДА,\n\
УКРЕПЛЁННУЮ ЗОНУ. ЕСЛИ ВЫ СУМЕЕТЕ\n\
ПРОРВАТЬСЯ, ТО ПРОНИКНЕТЕ В ПРОКЛЯТОЕ\n\
СЕРДЦЕ БАЗЫ И НАЙДЁТЕ РУБИЛЬНИК,\n\
ДЕРЖАЩИЙ НАСЕЛЕНИЕ ЗЕМЛИ В ЗАЛОЖНИКАХ.";

pub const C2TEXT: &str = "ВЫ ПОБЕДИЛИ! ВАША ПОБЕДА ПОЗВОЛИЛА\n\
ЧЕЛОВЕЧЕСТВУ ЭВАКУИРОВАТЬСЯ С ЗЕМЛИ\n\
И СПАСТИСЬ ОТ КОШМАРА. ТЕПЕРЬ ВЫ -\n\
ЕДИНСТВЕННЫЙ ЧЕЛОВЕК НА ПЛАНЕТЕ.\n\
ВАШИ СОСЕДИ - ПЛОТОЯДНЫЕ МУТАНТЫ,\n\
ХИЩНЫЕ ПРИШЕЛЬЦЫ И ЗЛЫЕ ДУХИ.\n\
ВЫ СПОКОЙНО ОЖИДАЕТЕ СМЕРТИ, ДОВОЛЬНЫЕ\n\
ТЕМ, ЧТО СПАСЛИ СВОЙ ВИД.\n\
\n\
НО ВДРУГ С ОРБИТЫ ПРИХОДИТ СООБЩЕНИЕ:\n\
\"СЕНСОРЫ ОБНАРУЖИЛИ ИСТОЧНИК ВТОРЖЕНИЯ\n\
ПРИШЕЛЬЦЕВ. ОТПРАВИВШИСЬ ТУДА, ВЫ\n\
СМОЖЕТЕ ПЕРЕКРЫТЬ ИМ ВХОД. БАЗА\n\
ПРИШЕЛЬЦЕВ НАХОДИТСЯ В СЕРДЦЕ ВАШЕГО\n\
РОДНОГО ГОРОДА, НЕДАЛЕКО ОТ КОСМОПОРТА.\"\n\
МЕДЛЕННО И МУЧИТЕЛЬНО ВЫ ВСТАЁТЕ\n\
И ВОЗВРАЩАЕТЕСЬ В БОЙ.";

pub const C3TEXT: &str = "ВЫ В ПРОГНИВШЕМ СЕРДЦЕ ГОРОДА,\n\
В ОКРУЖЕНИИ ТРУПОВ СВОИХ ВРАГОВ.\n\
ВЫ НЕ ВИДИТЕ СПОСОБА УНИЧТОЖИТЬ ПОРТАЛ\n\
ТВАРЕЙ С ЭТОЙ СТОРОНЫ, ПОЭТОМУ, СТИСНУВ\n\
ЗУБЫ, ШАГАЕТЕ СКВОЗЬ НЕГО.\n\
\n\
ДОЛЖЕН БЫТЬ СПОСОБ ЗАКРЫТЬ ЕГО С ТОЙ\n\
СТОРОНЫ. КАКАЯ РАЗНИЦА, ЧТО РАДИ ЭТОГО\n\
ПРИДЁТСЯ ПРОЙТИ ЧЕРЕЗ АД?";

pub const C4TEXT: &str = "ЧУДОВИЩНЫЙ ЛИК КРУПНЕЙШЕГО ИЗ ВИДАННЫХ\n\
ВАМИ ДЕМОНОВ РУШИТСЯ НА ГЛАЗАХ, КОГДА\n\
ВЫ ВСАЖИВАЕТЕ РАКЕТЫ В ЕГО ОБНАЖЁННЫЙ\n\
МОЗГ. МОНСТР ССЫХАЕТСЯ И ПОГИБАЕТ,\n\
А ЕГО БЬЮЩИЕСЯ КОНЕЧНОСТИ ОПУСТОШАЮТ\n\
БЕСЧИСЛЕННЫЕ МИЛИ ПОВЕРХНОСТИ АДА.\n\
\n\
ВЫ СДЕЛАЛИ ЭТО. ВТОРЖЕНИЕ ОКОНЧЕНО.\n\
ЗЕМЛЯ СПАСЕНА. АД ПОВЕРЖЕН В РУИНЫ.\n\
ИНТЕРЕСНО, КУДА ТЕПЕРЬ ОТПРАВЯТСЯ\n\
ГРЕШНИКИ ПОСЛЕ СМЕРТИ? УТЕРЕВ ПОТ СО\n\
ЛБА, ВЫ НАЧИНАЕТЕ ДОЛГИЙ ПУТЬ ДОМОЙ.\n\
ВОССТАНОВЛЕНИЕ ЗЕМЛИ ДОЛЖНО БЫТЬ\n\
КУДА ВЕСЕЛЕЕ, ЧЕМ ЕЁ РАЗРУШЕНИЕ.\n";

pub const C5TEXT: &str = "ПОЗДРАВЛЯЕМ, ВЫ НАШЛИ СЕКРЕТНЫЙ\n\
УРОВЕНЬ! ПОХОЖЕ, ОН ПОСТРОЕН ЛЮДЬМИ,\n\
А НЕ ДЕМОНАМИ. ЛЮБОПЫТНО, КТО ЖЕ\n\
ОБИТАЕТ В ЭТОМ УГОЛКЕ АДА?";

pub const C6TEXT: &str = "ПОЗДРАВЛЯЕМ, ВЫ НАШЛИ СВЕРХСЕКРЕТНЫЙ\n\
УРОВЕНЬ! ЛУЧШЕ ПРОНЕСТИСЬ ПО НЕМУ\n\
ПУЛЕЙ!\n";

pub const P1TEXT: &str = "Вы злорадствуете над дымящейся тушей\n\
Стража. Его смертью вы вырвали\n\
Ускоритель из зловонных когтей Ада.\n\
Расслабившись, вы осматриваете зал.\n\
Проклятье! Здесь должен был остаться\n\
хотя бы один рабочий прототип, но его\n\
не видно. Должно быть, демоны забрали\n\
его с собой.\n\
\n\
Вы должны найти прототип, иначе все\n\
ваши старания пропадут впустую.\n\
Продолжайте идти, продолжайте драться,\n\
продолжайте убивать. И да -\n\
продолжайте жить.";

pub const P2TEXT: &str = "Даже смертоносный лабиринт арчвайлов\n\
не смог остановить вас: вы добрались до\n\
прототипа Ускорителя, который вскоре\n\
был эффективно и навсегда выведен из\n\
строя.\n\
\n\
В таких делах вы мастер.";

pub const P3TEXT: &str = "Вы пробились в самое сердце дьявольского\n\
улья. Время для миссии 'найти и\n\
уничтожить', цель которой - Привратник,\n\
чьё гнусное потомство низвергается на\n\
Землю. Да, он плох. Но вы знаете, кто\n\
ещё хуже!\n\
\n\
Зловеще ухмыляясь, вы проверяете\n\
снаряжение и готовитесь устроить\n\
ублюдку немного Ада собственного\n\
изготовления!";

pub const P4TEXT: &str = "Мерзкая морда Привратника размазана по\n\
всей округе. Когда его истерзанный труп\n\
оседает, формируется перевёрнутый\n\
портал, затягивающий осколки последнего\n\
прототипа Ускорителя и немногих\n\
оставшихся демонов. Готово. Ад вернулся\n\
к истязанию грешных мертвецов вместо\n\
добрых живых. Не забудьте завещать\n\
внукам положить вам в гроб ракетницу.\n\
Если после смерти вы попадёте в Ад,\n\
она понадобится для последней\n\
зачистки...";

pub const P5TEXT: &str = "Вы нашли второй по сложности уровень\n\
игры. Надеемся, у вас осталось\n\
сохранение уровнем-двумя ранее. Если\n\
нет - готовьтесь умирать почаще.\n\
Только для морпехов-мастеров.";

pub const P6TEXT: &str = "Спорим, вам было интересно, каков же\n\
САМЫЙ сложный уровень? Теперь вы\n\
знаете. Живым не уходит никто.";

pub const T1TEXT: &str = "Вы с боем вырвались из заражённых\n\
экспериментальных лабораторий. Похоже,\n\
ОАК снова всё испортила. С такой\n\
текучкой кадров бедной старой\n\
корпорации непросто оформить\n\
корпоративную медицинскую страховку...\n\
\n\
Впереди военный комплекс, кишащий\n\
больными тварями, жаждущими вонзить\n\
в вас зубы. Если повезёт, в комплексе\n\
ещё осталось какое-нибудь боевое\n\
снаряжение.";

pub const T2TEXT: &str = "Впереди слышен скрежет тяжёлых\n\
механизмов. Вы очень надеетесь, что там\n\
не штампуют новых адских тварей, но\n\
готовы выпотрошить целое стадо, если\n\
придётся. Может, они готовят кровавый\n\
пир, но вы чувствуете себя злее двух\n\
тысяч маньяков, спрессованных в одного\n\
бешеного убийцу.\n\
\n\
Вы не намерены сдаваться легко.";

pub const T3TEXT: &str = "Открывающийся вид выглядит чертовски\n\
знакомо. И пахнет знакомо - жареными\n\
экскрементами. Это место не нравилось\n\
вам раньше и точно не понравится\n\
теперь. Чем дольше вы размышляете,\n\
тем сильнее злитесь. Поигрывая оружием,\n\
вы зловеще ухмыляетесь. Пора свести\n\
счёты.";

pub const T4TEXT: &str = "Внезапно всё стихает от горизонта до\n\
горизонта. Агонизирующее эхо Ада\n\
затихает, кошмарное небо голубеет,\n\
горы трупов монстров начинают\n\
испаряться вместе с наполнявшим воздух\n\
зловонием. Неужели получилось? Вы\n\
действительно победили?\n\
\n\
Вдали что-то грохочет. В разрушенном\n\
черепе демона-извергателя разгорается\n\
голубое сияние.";

pub const T5TEXT: &str = "Что теперь? Выглядит совершенно иначе.\n\
Похоже на апартаменты Тутанхамона.\n\
Что ж, что бы там ни было, хуже\n\
обычного не будет. Или будет? Может,\n\
лучше не будить спящих богов...";

pub const T6TEXT: &str = "Пора в отпуск. Вы выпотрошили недра\n\
Ада и, ей-богу, заслужили передышку.\n\
Вы бормочете себе под нос: пусть в\n\
следующий раз кто-нибудь другой надерёт\n\
Аду задницу. Впереди тихий городок с\n\
мирно текущей водой, аккуратными\n\
домиками и, надо полагать, без адских\n\
тварей.\n\
\n\
Сходя с транспорта, вы слышите топот\n\
железного копыта кибердемона.";

// creature names for the finale

pub const CC_ZOMBIE: &str = "ЗОМБИ";
pub const CC_SHOTGUN: &str = "ЗОМБИ-СЕРЖАНТ";
pub const CC_HEAVY: &str = "ЗОМБИ-ПУЛЕМЁТЧИК";
pub const CC_IMP: &str = "ИМП";
pub const CC_DEMON: &str = "ДЕМОН";
pub const CC_LOST: &str = "ПОТЕРЯННАЯ ДУША";
pub const CC_CACO: &str = "КАКОДЕМОН";
pub const CC_HELL: &str = "РЫЦАРЬ АДА";
pub const CC_BARON: &str = "БАРОН АДА";
pub const CC_ARACH: &str = "АРАХНОТРОН";
pub const CC_PAIN: &str = "ЭЛЕМЕНТАЛЬ БОЛИ";
pub const CC_REVEN: &str = "РЕВЕНАНТ";
pub const CC_MANCU: &str = "МАНКУБУС";
pub const CC_ARCH: &str = "АРЧВАЙЛ";
pub const CC_SPIDER: &str = "ПАУК-ПРЕДВОДИТЕЛЬ";
pub const CC_CYBER: &str = "КИБЕРДЕМОН";
pub const CC_HERO: &str = "НАШ ГЕРОЙ";
